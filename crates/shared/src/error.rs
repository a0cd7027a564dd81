use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryErrorCode {
    Unavailable,
    Timeout,
    Rejected,
}

/// Failure reported by the message delivery service. Never fatal: the form
/// keeps its field values so the visitor can retry.
#[derive(Debug, Clone, Error)]
#[error("{code:?}: {message}")]
pub struct DeliveryError {
    pub code: DeliveryErrorCode,
    pub message: String,
}

impl DeliveryError {
    pub fn new(code: DeliveryErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}
