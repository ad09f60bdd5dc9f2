use thiserror::Error;

/// Message shown when the identifier field is empty
pub const EMPTY_IDENTIFIER_MESSAGE: &str = "Please enter an EIN.";

/// Everything that can end a lookup cycle early
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Input rejected before any network activity
    #[error("{0}")]
    Validation(String),

    /// The endpoint answered with a non-success status
    #[error("HTTP error! Status: {status}. Details: {details}")]
    HttpStatus { status: u16, details: String },

    /// Network or decoding failure below the HTTP layer
    #[error("{0}")]
    Transport(String),
}

impl LookupError {
    pub fn empty_identifier() -> Self {
        Self::Validation(EMPTY_IDENTIFIER_MESSAGE.to_string())
    }

    /// Build a transport error from any error, keeping its source chain
    pub fn transport(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(&format!(": {cause}"));
            source = cause.source();
        }
        Self::Transport(message)
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
