use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    event_management::domain::model::{
        entities::event::Event,
        enums::{event_status::EventStatus, event_visibility::EventVisibility},
    },
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

/// Conditional writes return `None` when the stored row no longer matches
/// the expected precondition; nothing is written in that case.
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn insert(&self, event: &Event) -> Result<(), WorkflowDomainError>;

    async fn find_by_id(&self, event_id: Uuid) -> Result<Option<Event>, WorkflowDomainError>;

    async fn list_visible(
        &self,
        visibility: EventVisibility,
        status: Option<EventStatus>,
    ) -> Result<Vec<Event>, WorkflowDomainError>;

    /// Rewrites name, type, description, participants, schedule and
    /// coordinator while the event is still PENDING in `observed_cycle`.
    async fn update_details(
        &self,
        event: &Event,
        observed_cycle: i32,
    ) -> Result<Option<Event>, WorkflowDomainError>;

    async fn transition_status(
        &self,
        event_id: Uuid,
        from: EventStatus,
        to: EventStatus,
        review_cycle: i32,
    ) -> Result<Option<Event>, WorkflowDomainError>;

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
