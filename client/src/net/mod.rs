//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` adapts the shared `triage` flow to the browser's `fetch`.

pub mod api;
