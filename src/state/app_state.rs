//! Application state definitions

use super::forms::{validate, ApplicationForm, ErrorMap, Summary};
use std::collections::VecDeque;

/// Result of a submit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed and the summary was replaced
    Accepted,
    /// Validation failed with this many field errors
    Rejected(usize),
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub form: ApplicationForm,
    /// Errors from the last submit attempt
    pub errors: ErrorMap,
    /// Snapshot from the last successful submit
    pub summary: Option<Summary>,
    /// Runtime errors waiting to be shown, oldest first
    pub error_queue: VecDeque<String>,
}

impl AppState {
    /// Validate the form. On success the summary is replaced with a snapshot of
    /// the current values; on failure the previous summary is left alone.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.errors = validate(&self.form.values);
        if self.errors.is_empty() {
            self.summary = Some(Summary::new(self.form.values.clone()));
            SubmitOutcome::Accepted
        } else {
            SubmitOutcome::Rejected(self.errors.len())
        }
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    /// Error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Dismiss the shown error, revealing the next one if any
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }
}
