//! Backend worker: a dedicated thread with a current-thread tokio runtime
//! that owns the delivery service and reports outcomes back as UI events.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender};
use view_core::DeliveryService;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

pub fn spawn_backend_thread(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    delivery: Arc<dyn DeliveryService>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!(error = %err, "failed to build backend runtime");
                let _ = ui_tx.try_send(UiEvent::ContactDeliveryFailed {
                    reason: format!("backend startup failure: {err}"),
                });
                return;
            }
        };

        // The loop ends when the UI side drops its sender; any in-flight
        // delivery result queued after that is simply discarded with the
        // channel, which is the abandonment contract for teardown.
        while let Ok(command) = cmd_rx.recv() {
            match command {
                BackendCommand::SubmitContact { message } => {
                    let outcome = runtime.block_on(delivery.deliver(message));
                    let event = match outcome {
                        Ok(()) => UiEvent::ContactDelivered,
                        Err(err) => {
                            tracing::warn!(error = %err, "contact delivery failed");
                            UiEvent::ContactDeliveryFailed {
                                reason: err.to_string(),
                            }
                        }
                    };
                    let _ = ui_tx.try_send(event);
                }
            }
        }
        tracing::debug!("backend worker shutting down");
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::contact::ContactMessage;
    use std::time::Duration;
    use view_core::{MissingDeliveryService, SimulatedDelivery};

    fn message() -> ContactMessage {
        ContactMessage {
            name: "A".to_string(),
            email: "a@a.com".to_string(),
            service: String::new(),
            message: String::new(),
        }
    }

    #[test]
    fn worker_reports_success_for_simulated_delivery() {
        let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(4);
        let (ui_tx, ui_rx) = crossbeam_channel::bounded(4);
        spawn_backend_thread(
            cmd_rx,
            ui_tx,
            Arc::new(SimulatedDelivery::new(Duration::from_millis(1))),
        );

        cmd_tx
            .send(BackendCommand::SubmitContact { message: message() })
            .expect("worker is listening");
        let event = ui_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("worker replies");
        assert!(matches!(event, UiEvent::ContactDelivered));
    }

    #[test]
    fn worker_reports_failure_with_a_reason() {
        let (cmd_tx, cmd_rx) = crossbeam_channel::bounded(4);
        let (ui_tx, ui_rx) = crossbeam_channel::bounded(4);
        spawn_backend_thread(cmd_rx, ui_tx, Arc::new(MissingDeliveryService));

        cmd_tx
            .send(BackendCommand::SubmitContact { message: message() })
            .expect("worker is listening");
        let event = ui_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("worker replies");
        match event {
            UiEvent::ContactDeliveryFailed { reason } => {
                assert!(reason.contains("unavailable"), "got {reason:?}");
            }
            UiEvent::ContactDelivered => panic!("delivery cannot succeed without a backend"),
        }
    }
}
