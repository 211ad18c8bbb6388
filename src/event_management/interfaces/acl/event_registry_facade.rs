use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    event_management::domain::model::entities::event::Event,
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

#[async_trait]
pub trait EventRegistryFacade: Send + Sync {
    /// Fails with `NotFound` when the event does not exist.
    async fn load_event(&self, event_id: Uuid) -> Result<Event, WorkflowDomainError>;

    async fn reopen_for_review(
        &self,
        event_id: Uuid,
        observed_cycle: i32,
    ) -> Result<Option<Event>, WorkflowDomainError>;

    async fn assign_venue(
        &self,
        event_id: Uuid,
        venue_id: Uuid,
    ) -> Result<Option<Event>, WorkflowDomainError>;
}
