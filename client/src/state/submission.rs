//! Form state for one classification round trip.
//!
//! DESIGN
//! ======
//! `start` is the only way into the pending state and `complete` the only way
//! out, and `complete` accepts any outcome. Whatever the request does, the
//! loading indicator is cleared and the submit button re-enabled.

#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use triage::{Classification, Submission, SubmitError};

/// Notice shown when both inputs are filled and the file will be sent.
pub const FILE_PRECEDENCE_NOTICE: &str =
    "A file is selected: it will be sent and the text will be ignored.";

/// State behind the submission form, result panel, and error panel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionState {
    /// A request is in flight.
    pub loading: bool,
    /// Last successful result, shown in the result panel.
    pub result: Option<Classification>,
    /// Last failure message, shown in the error panel.
    pub error: Option<String>,
}

impl SubmissionState {
    /// Submit control is disabled while a request is in flight.
    pub fn submit_disabled(&self) -> bool {
        self.loading
    }

    /// Begin a submission from the current form values.
    ///
    /// Hides previous panels, then validates. On empty input the error panel
    /// shows the validation message and no submission is returned; the
    /// controls stay as they were. Returns `None` while already pending.
    pub fn start<F>(&mut self, text: &str, file: Option<F>) -> Option<Submission<F>> {
        if self.loading {
            return None;
        }
        self.result = None;
        self.error = None;
        match Submission::from_inputs(text, file) {
            Ok(submission) => {
                self.loading = true;
                Some(submission)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    /// Finish the in-flight submission with its outcome.
    pub fn complete(&mut self, outcome: Result<Classification, SubmitError>) {
        self.loading = false;
        match outcome {
            Ok(classification) => {
                self.result = Some(classification);
                self.error = None;
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e.to_string());
            }
        }
    }
}

/// Notice to show under the form for the current inputs, if any.
pub fn precedence_notice(text: &str, has_file: bool) -> Option<&'static str> {
    (has_file && !text.trim().is_empty()).then_some(FILE_PRECEDENCE_NOTICE)
}
