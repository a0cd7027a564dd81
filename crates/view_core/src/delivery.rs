//! Message delivery boundary. The page never talks to a real backend; the
//! trait keeps the integration pluggable and the simulated implementation
//! always succeeds after a fixed delay.

use std::time::Duration;

use async_trait::async_trait;
use shared::{
    contact::ContactMessage,
    error::{DeliveryError, DeliveryErrorCode},
};

/// External collaborator that transmits a contact message. Latency is
/// unbounded from the caller's point of view; implementations report success
/// or failure and never panic.
#[async_trait]
pub trait DeliveryService: Send + Sync {
    async fn deliver(&self, message: ContactMessage) -> Result<(), DeliveryError>;
}

/// Always succeeds after a fixed delay. Stands in for the real transport.
pub struct SimulatedDelivery {
    latency: Duration,
}

impl SimulatedDelivery {
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for SimulatedDelivery {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LATENCY)
    }
}

#[async_trait]
impl DeliveryService for SimulatedDelivery {
    async fn deliver(&self, message: ContactMessage) -> Result<(), DeliveryError> {
        tracing::debug!(from = %message.email, "simulating contact message delivery");
        tokio::time::sleep(self.latency).await;
        tracing::info!(from = %message.email, "contact message delivered");
        Ok(())
    }
}

/// Fallback used when no delivery backend is wired up at all.
pub struct MissingDeliveryService;

#[async_trait]
impl DeliveryService for MissingDeliveryService {
    async fn deliver(&self, _message: ContactMessage) -> Result<(), DeliveryError> {
        Err(DeliveryError::new(
            DeliveryErrorCode::Unavailable,
            "message delivery backend is unavailable",
        ))
    }
}

#[cfg(test)]
#[path = "tests/delivery_tests.rs"]
mod tests;
