use serde::{Deserialize, Serialize};

/// The payload handed to the message delivery service. Name and email are
/// required by the form model before this struct is ever built; service and
/// message may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub service: String,
    pub message: String,
}
