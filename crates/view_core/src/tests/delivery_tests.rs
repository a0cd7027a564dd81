use super::*;
use shared::{contact::ContactMessage, error::DeliveryErrorCode};
use std::time::Duration;

fn message() -> ContactMessage {
    ContactMessage {
        name: "A".to_string(),
        email: "a@a.com".to_string(),
        service: String::new(),
        message: String::new(),
    }
}

#[tokio::test(start_paused = true)]
async fn simulated_delivery_succeeds_after_configured_latency() {
    let service = SimulatedDelivery::new(Duration::from_millis(50));
    let started = tokio::time::Instant::now();
    service.deliver(message()).await.expect("always succeeds");
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(50), "resolved at {elapsed:?}");
}

#[tokio::test]
async fn missing_service_reports_unavailable() {
    let err = MissingDeliveryService
        .deliver(message())
        .await
        .unwrap_err();
    assert_eq!(err.code, DeliveryErrorCode::Unavailable);
}
