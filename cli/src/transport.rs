//! `triage::Transport` over `reqwest`.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use triage::{FileUpload, RawResponse, RequestBody, SubmitError, Transport};

pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (TLS backend init).
    pub fn new(
        request_timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()?;
        Ok(Self { http })
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    type File = FileUpload;

    async fn post(
        &self,
        url: &str,
        body: RequestBody<'_, FileUpload>,
    ) -> Result<RawResponse, SubmitError> {
        let request = self.http.post(url);
        let request = match body {
            RequestBody::Json(payload) => request.json(&payload),
            RequestBody::Multipart { field, file } => {
                let part = Part::bytes(file.bytes.clone())
                    .file_name(file.name.clone())
                    .mime_str(file.content_type)
                    .map_err(|e| SubmitError::Transport(e.to_string()))?;
                request.multipart(Form::new().part(field, part))
            }
        };

        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        tracing::debug!(%url, status, bytes = body.len(), "response received");
        Ok(RawResponse { status, body })
    }
}
