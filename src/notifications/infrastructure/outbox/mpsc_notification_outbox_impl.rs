use tokio::sync::mpsc;

use crate::notifications::{
    domain::model::events::workflow_outcome::WorkflowOutcome,
    infrastructure::outbox::notification_outbox::{NotificationOutbox, NotificationOutboxError},
};

pub struct MpscNotificationOutboxImpl {
    sender: mpsc::Sender<WorkflowOutcome>,
}

impl MpscNotificationOutboxImpl {
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<WorkflowOutcome>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        (Self { sender }, receiver)
    }
}

impl NotificationOutbox for MpscNotificationOutboxImpl {
    fn enqueue(&self, outcome: WorkflowOutcome) -> Result<(), NotificationOutboxError> {
        match self.sender.try_send(outcome) {
            Ok(()) => Ok(()),
            Err(mpsc::error::TrySendError::Full(_)) => Err(NotificationOutboxError::Full),
            Err(mpsc::error::TrySendError::Closed(_)) => Err(NotificationOutboxError::Closed),
        }
    }
}
