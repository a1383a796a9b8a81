//! Shared submission model and request flow for the email triage service.
//!
//! This crate owns the wire representation used by both `client` and `cli`.
//! It performs no I/O itself: callers plug in a [`Transport`] that knows how to
//! POST a [`RequestBody`] and hand back the raw status and body text.
//!
//! FLOW
//! ====
//! inputs → [`Submission::from_inputs`] → [`build_request`] → [`Transport::post`]
//! → [`interpret_response`] → [`Classification`] or [`SubmitError`].

pub mod classifier;
pub mod config;
pub mod error;
pub mod submission;
pub mod wire;

pub use classifier::{Classifier, RawResponse, Transport};
pub use config::{ApiConfig, DEFAULT_API_BASE_URL};
pub use error::SubmitError;
pub use submission::{FileUpload, RequestBody, Submission, TextPayload, build_request};
pub use wire::{Classification, ValidationReport, interpret_response, interpret_validation};
