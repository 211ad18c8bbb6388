use thiserror::Error;

use crate::notifications::domain::model::events::workflow_outcome::WorkflowOutcome;

#[derive(Debug, Error, Eq, PartialEq)]
pub enum NotificationOutboxError {
    #[error("notification queue is full")]
    Full,

    #[error("notification queue is closed")]
    Closed,
}

pub trait NotificationOutbox: Send + Sync {
    fn enqueue(&self, outcome: WorkflowOutcome) -> Result<(), NotificationOutboxError>;
}
