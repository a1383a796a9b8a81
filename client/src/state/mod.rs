//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data so transitions can be unit tested without a browser;
//! components wrap it in `RwSignal` and share it through context.

pub mod submission;
