//! # Response Renderer
//!
//! Writes the outcome of a cycle to the display area and the banner.

use super::banner::{Severity, StatusBanner};
use super::display::{DisplayArea, FAILURE_TEXT};
use super::error::LookupError;
use super::result::LookupResult;
use crate::config::DEFAULT_SUBJECT;

#[derive(Debug, Clone)]
pub struct ResponseRenderer {
    subject: String,
}

impl ResponseRenderer {
    /// `subject` is the noun used in banner messages, e.g. "organization"
    pub fn new<S: Into<String>>(subject: S) -> Self {
        Self {
            subject: subject.into(),
        }
    }

    /// Cycle start: hide the banner and show the loading placeholder
    pub fn begin(&self, display: &mut DisplayArea, banner: &mut StatusBanner) {
        banner.hide();
        display.set_loading();
    }

    /// Input rejected before the request was issued
    pub fn reject(&self, err: &LookupError, display: &mut DisplayArea, banner: &mut StatusBanner) {
        tracing::error!("Lookup rejected: {err}");
        display.clear();
        banner.show(err.to_string(), Severity::Error);
    }

    pub fn render(
        &self,
        result: &LookupResult,
        display: &mut DisplayArea,
        banner: &mut StatusBanner,
    ) {
        match result {
            LookupResult::Success { body } => {
                let pretty =
                    serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
                display.set_text(pretty);
                banner.show(self.success_message(), Severity::Success);
            }
            LookupResult::Failure {
                status_code,
                message,
            } => {
                tracing::error!(status = ?status_code, "Error fetching data: {message}");
                display.set_text(FAILURE_TEXT);
                banner.show(self.failure_message(message), Severity::Error);
            }
        }
    }

    pub fn success_message(&self) -> String {
        let mut chars = self.subject.chars();
        let subject = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => String::new(),
        };
        format!("{subject} data fetched successfully!")
    }

    pub fn failure_message(&self, message: &str) -> String {
        format!("Failed to lookup {}: {message}", self.subject)
    }
}

impl Default for ResponseRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_SUBJECT)
    }
}
