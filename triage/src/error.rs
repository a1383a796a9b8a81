//! Submission errors.
//!
//! The `Display` text of every variant is the message shown to the user, so
//! the browser page and the CLI can render `err.to_string()` as-is.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Message shown when neither text nor a file was provided.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text or select a file.";

/// Fallback when a failed classification response carries no `error` field.
pub const PROCESS_FALLBACK_MESSAGE: &str = "Failed to process the email.";

/// Fallback when a failed validation response carries no `error` field.
pub const VALIDATE_FALLBACK_MESSAGE: &str = "File validation failed.";

/// Error returned by the submission flow.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Neither text nor a file was provided. No request was sent.
    #[error("{}", EMPTY_INPUT_MESSAGE)]
    EmptyInput,
    /// The endpoint answered outside the 2xx range, or reported a failure in-band.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The request never produced a response (connection refused, DNS, aborted fetch).
    #[error("{0}")]
    Transport(String),
    /// The response body was not the JSON we expected.
    #[error("invalid response from server: {0}")]
    Decode(String),
}
