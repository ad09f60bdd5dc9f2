use serde_json::Value;

use super::error::LookupError;

/// Outcome of one lookup cycle
///
/// Built once per cycle, handed straight to the renderer, then dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupResult {
    Success {
        body: Value,
    },
    Failure {
        status_code: Option<u16>,
        message: String,
    },
}

impl LookupResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<LookupError> for LookupResult {
    fn from(err: LookupError) -> Self {
        Self::Failure {
            status_code: err.status_code(),
            message: err.to_string(),
        }
    }
}

impl From<Result<Value, LookupError>> for LookupResult {
    fn from(result: Result<Value, LookupError>) -> Self {
        match result {
            Ok(body) => Self::Success { body },
            Err(err) => err.into(),
        }
    }
}
