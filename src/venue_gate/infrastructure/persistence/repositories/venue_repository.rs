use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
    venue_gate::domain::model::entities::venue::Venue,
};

#[async_trait]
pub trait VenueRepository: Send + Sync {
    async fn find_active_by_id(&self, venue_id: Uuid) -> Result<Option<Venue>, WorkflowDomainError>;

    async fn list_active(&self) -> Result<Vec<Venue>, WorkflowDomainError>;
}
