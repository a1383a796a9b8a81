//! Response schema and decoding.
//!
//! The backend speaks Portuguese on the wire (`categoria`, `explicacao`,
//! `resposta`); the Rust side uses English field names and maps them with
//! serde renames.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{PROCESS_FALLBACK_MESSAGE, SubmitError, VALIDATE_FALLBACK_MESSAGE};

/// Category the backend uses to report its own internal failures with a 200.
const BACKEND_ERROR_CATEGORY: &str = "Erro";

/// Successful classification outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "explicacao", default)]
    pub explanation: String,
    #[serde(rename = "resposta", default)]
    pub suggested_reply: String,
}

impl Classification {
    /// The backend caught an exception and reported it in-band.
    #[must_use]
    pub fn is_backend_error(&self) -> bool {
        self.category == BACKEND_ERROR_CATEGORY
    }
}

/// Successful `/validate` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub status: String,
}

impl ValidationReport {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Turn a `/processar-email` response into a result.
///
/// # Errors
///
/// - [`SubmitError::Server`] for non-2xx statuses (message from the `error`
///   field or a fallback) and for in-band backend failures.
/// - [`SubmitError::Decode`] when the body is not the expected JSON.
pub fn interpret_response(status: u16, body: &str) -> Result<Classification, SubmitError> {
    let classification: Classification = decode(status, body, PROCESS_FALLBACK_MESSAGE)?;
    if classification.is_backend_error() {
        let message = if classification.explanation.trim().is_empty() {
            PROCESS_FALLBACK_MESSAGE.to_owned()
        } else {
            classification.explanation
        };
        return Err(SubmitError::Server { status, message });
    }
    Ok(classification)
}

/// Turn a `/validate` response into a report.
///
/// # Errors
///
/// Same rules as [`interpret_response`], with a validation-specific fallback.
/// A 2xx report whose status is not `"ok"` is also a [`SubmitError::Server`].
pub fn interpret_validation(status: u16, body: &str) -> Result<ValidationReport, SubmitError> {
    let report: ValidationReport = decode(status, body, VALIDATE_FALLBACK_MESSAGE)?;
    if !report.is_ok() {
        return Err(SubmitError::Server {
            status,
            message: VALIDATE_FALLBACK_MESSAGE.to_owned(),
        });
    }
    Ok(report)
}

fn decode<T: DeserializeOwned>(status: u16, body: &str, fallback: &str) -> Result<T, SubmitError> {
    if !(200..300).contains(&status) {
        // Error bodies that are not JSON still produce the fallback message.
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_owned());
        return Err(SubmitError::Server { status, message });
    }
    serde_json::from_str(body).map_err(|e| SubmitError::Decode(e.to_string()))
}
