//! Read-only text surface that shows the last response or error.

/// Placeholder written at the start of every cycle
pub const LOADING_PLACEHOLDER: &str = "Loading...";

/// Text written when a cycle fails
pub const FAILURE_TEXT: &str = "Error fetching data.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayArea {
    text: String,
}

impl DisplayArea {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_loading(&mut self) {
        self.set_text(LOADING_PLACEHOLDER);
    }

    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_loading(&self) -> bool {
        self.text == LOADING_PLACEHOLDER
    }
}
