//! Backend commands queued from UI to the delivery worker.

use shared::contact::ContactMessage;

pub enum BackendCommand {
    SubmitContact { message: ContactMessage },
}
