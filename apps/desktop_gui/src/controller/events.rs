//! Events flowing from the backend worker into the UI, plus the toast model
//! used to surface them.

use std::time::{Duration, Instant};

pub enum UiEvent {
    ContactDelivered,
    ContactDeliveryFailed { reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Error,
}

/// Transient notification shown in the corner of the page.
#[derive(Debug, Clone)]
pub struct StatusToast {
    pub severity: ToastSeverity,
    pub message: String,
    pub raised_at: Instant,
}

impl StatusToast {
    pub const LIFETIME: Duration = Duration::from_secs(4);

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastSeverity::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastSeverity::Error, message)
    }

    fn new(severity: ToastSeverity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            raised_at: Instant::now(),
        }
    }

    pub fn expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) >= Self::LIFETIME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_expires_only_after_its_lifetime() {
        let toast = StatusToast::success("sent");
        let raised = toast.raised_at;
        assert!(!toast.expired(raised));
        assert!(!toast.expired(raised + Duration::from_secs(3)));
        assert!(toast.expired(raised + StatusToast::LIFETIME));
    }

    #[test]
    fn toast_constructors_set_severity() {
        assert_eq!(StatusToast::success("ok").severity, ToastSeverity::Success);
        assert_eq!(StatusToast::error("bad").severity, ToastSeverity::Error);
    }
}
