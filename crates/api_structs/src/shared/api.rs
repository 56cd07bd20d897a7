use serde::{Deserialize, Serialize};

/// Status envelope included in every response.
///
/// Error responses consist of only this envelope with `error_code` set to
/// the http status code.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ResponseStatus {
    pub error_code: u16,
    pub message: String,
}

impl ResponseStatus {
    pub fn new(error_code: u16, message: impl Into<String>) -> Self {
        Self {
            error_code,
            message: message.into(),
        }
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(200, message)
    }
}
