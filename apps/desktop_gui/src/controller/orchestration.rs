//! Command orchestration from UI actions to the backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Queues a command for the backend worker. The error carries a
/// visitor-facing reason; the caller decides how to surface it and how to
/// roll back whatever state it set before dispatching.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), String> {
    let cmd_name = match &cmd {
        BackendCommand::SubmitContact { .. } => "submit_contact",
    };

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(_)) => {
            tracing::warn!(command = cmd_name, "backend command queue is full");
            Err("the delivery queue is full, please try again".to_string())
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::error!(command = cmd_name, "backend worker is disconnected");
            Err("the delivery worker is not running, restart the app and try again".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::contact::ContactMessage;

    fn submit_command() -> BackendCommand {
        BackendCommand::SubmitContact {
            message: ContactMessage {
                name: "A".to_string(),
                email: "a@a.com".to_string(),
                service: String::new(),
                message: String::new(),
            },
        }
    }

    #[test]
    fn successful_dispatch_queues_the_command() {
        let (tx, rx) = crossbeam_channel::bounded(4);
        dispatch_backend_command(&tx, submit_command()).expect("queued");
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn full_queue_reports_a_retry_reason() {
        let (tx, _rx) = crossbeam_channel::bounded(0);
        let reason = dispatch_backend_command(&tx, submit_command()).unwrap_err();
        assert!(reason.contains("full"), "got {reason:?}");
    }

    #[test]
    fn disconnected_worker_reports_a_restart_reason() {
        let (tx, rx) = crossbeam_channel::bounded(4);
        drop(rx);
        let reason = dispatch_backend_command(&tx, submit_command()).unwrap_err();
        assert!(reason.contains("restart"), "got {reason:?}");
    }
}
