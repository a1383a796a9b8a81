//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the outcome panels from the shared `SubmissionState`
//! context provided by `App`.

pub mod error_panel;
pub mod result_panel;
