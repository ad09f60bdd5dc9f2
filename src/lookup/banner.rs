//! # Status Banner
//!
//! Single-slot notification surface. Every `show` replaces the previous
//! message and severity outright; nothing is stacked or queued.

use serde::Serialize;

/// Visual classification of a banner message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// What the banner currently holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BannerState {
    pub visible: bool,
    pub message: String,
    /// `None` until the first `show`
    pub severity: Option<Severity>,
}

/// Banner state machine with exactly two transitions: `show` and `hide`
#[derive(Debug, Clone)]
pub struct StatusBanner {
    state: BannerState,
}

impl StatusBanner {
    pub fn new() -> Self {
        Self {
            state: BannerState {
                visible: false,
                message: String::new(),
                severity: None,
            },
        }
    }

    /// Make the banner invisible. Message and severity are left as they are.
    pub fn hide(&mut self) {
        self.state.visible = false;
    }

    pub fn show<S: Into<String>>(&mut self, message: S, severity: Severity) {
        self.state.message = message.into();
        // Exactly one classification at a time; the previous one never lingers
        self.state.severity = Some(severity);
        self.state.visible = true;
    }

    pub fn state(&self) -> &BannerState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state.visible
    }

    pub fn message(&self) -> &str {
        &self.state.message
    }

    pub fn severity(&self) -> Option<Severity> {
        self.state.severity
    }
}

impl Default for StatusBanner {
    fn default() -> Self {
        Self::new()
    }
}
