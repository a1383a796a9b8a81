//! HTTP calls to the classification backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with uploads sent as
//! `FormData`. Server-side (SSR): stubs returning an error, since submissions
//! only ever start from a browser event.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a `SubmitError` whose text goes straight into
//! the error panel. Nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use triage::{ApiConfig, Classification, Submission, SubmitError};
#[cfg(feature = "hydrate")]
use triage::{Classifier, RawResponse, RequestBody, Transport};

/// File handle produced by the page's file picker.
#[cfg(feature = "hydrate")]
pub type BrowserFile = web_sys::File;

/// File handle produced by the page's file picker. There are no files
/// outside the browser, so this type has no values.
#[cfg(not(feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrowserFile {}

#[cfg(any(test, not(feature = "hydrate")))]
const UNAVAILABLE_MESSAGE: &str = "not available on server";

/// `triage::Transport` over the browser's `fetch`.
#[cfg(feature = "hydrate")]
pub struct BrowserTransport;

#[cfg(feature = "hydrate")]
#[async_trait::async_trait(?Send)]
impl Transport for BrowserTransport {
    type File = BrowserFile;

    async fn post(
        &self,
        url: &str,
        body: RequestBody<'_, BrowserFile>,
    ) -> Result<RawResponse, SubmitError> {
        let request = match body {
            RequestBody::Json(payload) => gloo_net::http::Request::post(url)
                .json(&payload)
                .map_err(|e| SubmitError::Transport(e.to_string()))?,
            RequestBody::Multipart { field, file } => {
                let form = web_sys::FormData::new().map_err(js_error)?;
                form.append_with_blob_and_filename(field, file, &file.name())
                    .map_err(js_error)?;
                gloo_net::http::Request::post(url)
                    .body(form)
                    .map_err(|e| SubmitError::Transport(e.to_string()))?
            }
        };

        let resp = request
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(feature = "hydrate")]
fn js_error(value: wasm_bindgen::JsValue) -> SubmitError {
    SubmitError::Transport(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Run a submission against `/processar-email`, validating uploads first.
///
/// # Errors
///
/// Returns the `SubmitError` to show in the error panel.
pub async fn process_submission(
    config: &ApiConfig,
    submission: &Submission<BrowserFile>,
) -> Result<Classification, SubmitError> {
    #[cfg(feature = "hydrate")]
    {
        let classifier = Classifier::new(BrowserTransport, config.clone());
        let outcome = classifier.process(submission).await;
        if let Err(e) = &outcome {
            log::warn!("classification failed: {e}");
        }
        outcome
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, submission);
        Err(SubmitError::Transport(UNAVAILABLE_MESSAGE.to_owned()))
    }
}
