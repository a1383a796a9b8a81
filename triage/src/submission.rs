//! User input and request construction.
//!
//! A [`Submission`] is generic over the file handle so each front end keeps
//! its native type: `web_sys::File` in the browser, [`FileUpload`] on the
//! command line.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use std::path::Path;

use serde::Serialize;

use crate::error::SubmitError;

/// Multipart field name the backend reads uploads from.
pub const FILE_FIELD: &str = "file";

/// What the user asked us to classify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission<F> {
    /// Trimmed, non-empty email text.
    Text(String),
    /// An uploaded file.
    File(F),
}

impl<F> Submission<F> {
    /// Build a submission from the raw form values.
    ///
    /// A selected file takes precedence over text. Text is trimmed before the
    /// emptiness check and is sent trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::EmptyInput`] when there is no file and the text
    /// is blank.
    pub fn from_inputs(text: &str, file: Option<F>) -> Result<Self, SubmitError> {
        if let Some(file) = file {
            return Ok(Self::File(file));
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(SubmitError::EmptyInput);
        }
        Ok(Self::Text(text.to_owned()))
    }

    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }
}

/// JSON body for text submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextPayload<'a> {
    pub texto: &'a str,
}

/// Body of an outgoing `POST`.
#[derive(Debug, PartialEq, Eq)]
pub enum RequestBody<'a, F> {
    /// `application/json` with `{ "texto": ... }`.
    Json(TextPayload<'a>),
    /// `multipart/form-data` with a single file part.
    Multipart { field: &'static str, file: &'a F },
}

impl<F> RequestBody<'_, F> {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Json(_) => "json",
            Self::Multipart { .. } => "multipart",
        }
    }
}

/// The one place that decides how a submission goes over the wire.
#[must_use]
pub fn build_request<F>(submission: &Submission<F>) -> RequestBody<'_, F> {
    match submission {
        Submission::File(file) => RequestBody::Multipart {
            field: FILE_FIELD,
            file,
        },
        Submission::Text(texto) => RequestBody::Json(TextPayload { texto }),
    }
}

/// An in-memory file ready to be attached to a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let content_type = content_type_for(&name);
        Self {
            name,
            content_type,
            bytes,
        }
    }

    /// Read a file from disk, keeping only its file name for the upload.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be read.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_owned());
        Ok(Self::new(name, bytes))
    }
}

/// MIME type for the formats the backend understands.
#[must_use]
pub fn content_type_for(name: &str) -> &'static str {
    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("txt") => "text/plain",
        Some("pdf") => "application/pdf",
        _ => "application/octet-stream",
    }
}
