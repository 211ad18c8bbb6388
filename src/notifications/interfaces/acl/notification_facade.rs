use crate::notifications::domain::model::events::workflow_outcome::WorkflowOutcome;

/// Hand-off point for workflow outcomes. Publishing only queues the outcome;
/// recipient lookup and delivery happen on the delivery worker, so it never
/// waits on persistence and never fails the caller.
pub trait NotificationFacade: Send + Sync {
    fn publish(&self, outcome: WorkflowOutcome);
}
