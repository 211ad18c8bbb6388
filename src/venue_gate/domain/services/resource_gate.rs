use crate::{
    event_management::domain::model::{entities::event::Event, enums::event_status::EventStatus},
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

/// Venue assignment and expense entry unlock only once an event is APPROVED.
pub struct ResourceGate;

impl ResourceGate {
    pub fn ensure_unlocked(event: &Event, operation: &str) -> Result<(), WorkflowDomainError> {
        if event.status() == EventStatus::Approved {
            return Ok(());
        }

        Err(WorkflowDomainError::InvalidState(format!(
            "{operation} requires an APPROVED event, current status is {}",
            event.status()
        )))
    }
}
