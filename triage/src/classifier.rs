//! Transport seam and the submission flow built on top of it.
//!
//! DESIGN
//! ======
//! The flow (validate input → build body → POST → interpret) lives here once.
//! Front ends only implement [`Transport`]. Futures are `?Send` because the
//! browser transport runs on the single-threaded wasm event loop.

#[cfg(test)]
#[path = "classifier_test.rs"]
mod classifier_test;

use async_trait::async_trait;

use crate::config::ApiConfig;
use crate::error::SubmitError;
use crate::submission::{FILE_FIELD, RequestBody, Submission, build_request};
use crate::wire::{Classification, ValidationReport, interpret_response, interpret_validation};

/// Status and body text of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Sends one `POST` and returns whatever came back.
///
/// Implementations must not interpret the status: a 4xx/5xx is still
/// `Ok(RawResponse)`. Only failures to obtain a response at all map to
/// [`SubmitError::Transport`].
#[async_trait(?Send)]
pub trait Transport {
    /// Native file handle this transport can attach to a multipart body.
    type File;

    async fn post(
        &self,
        url: &str,
        body: RequestBody<'_, Self::File>,
    ) -> Result<RawResponse, SubmitError>;
}

/// Client for the classification backend.
pub struct Classifier<T> {
    transport: T,
    config: ApiConfig,
}

impl<T: Transport> Classifier<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate raw form values and classify them.
    ///
    /// # Errors
    ///
    /// [`SubmitError::EmptyInput`] without touching the network when both
    /// inputs are empty; otherwise any error from [`Classifier::classify`].
    pub async fn submit(
        &self,
        text: &str,
        file: Option<T::File>,
    ) -> Result<Classification, SubmitError> {
        let submission = Submission::from_inputs(text, file)?;
        self.classify(&submission).await
    }

    /// Send a submission to `/processar-email`.
    ///
    /// # Errors
    ///
    /// Returns transport, status, and decode failures as [`SubmitError`].
    pub async fn classify(
        &self,
        submission: &Submission<T::File>,
    ) -> Result<Classification, SubmitError> {
        let url = self.config.process_url();
        let body = build_request(submission);
        tracing::debug!(%url, kind = body.kind(), "submitting email for classification");

        let response = self.transport.post(&url, body).await?;
        let result = interpret_response(response.status, &response.body);
        match &result {
            Ok(c) => tracing::info!(
                status = response.status,
                category = %c.category,
                "classification received"
            ),
            Err(e) => tracing::warn!(status = response.status, error = %e, "classification failed"),
        }
        result
    }

    /// Classify a submission, running file uploads through `/validate` first.
    ///
    /// # Errors
    ///
    /// A rejected upload stops the flow with the validation error; otherwise
    /// any error from [`Classifier::classify`].
    pub async fn process(
        &self,
        submission: &Submission<T::File>,
    ) -> Result<Classification, SubmitError> {
        if let Submission::File(file) = submission {
            self.validate(file).await?;
        }
        self.classify(submission).await
    }

    /// Send a file to `/validate` and return the parsed report.
    ///
    /// # Errors
    ///
    /// Returns transport, status, and decode failures as [`SubmitError`].
    pub async fn validate(&self, file: &T::File) -> Result<ValidationReport, SubmitError> {
        let url = self.config.validate_url();
        tracing::debug!(%url, "validating upload");

        let body = RequestBody::Multipart {
            field: FILE_FIELD,
            file,
        };
        let response = self.transport.post(&url, body).await?;
        interpret_validation(response.status, &response.body)
    }
}
