use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    event_management::{
        domain::model::entities::event::Event,
        infrastructure::persistence::repositories::event_repository::EventRepository,
        interfaces::acl::event_registry_facade::EventRegistryFacade,
    },
    shared::{
        application::retry_policy::RetryPolicy,
        domain::model::enums::workflow_domain_error::WorkflowDomainError,
    },
};

pub struct EventRegistryFacadeImpl {
    event_repository: Arc<dyn EventRepository>,
    retry_policy: RetryPolicy,
}

impl EventRegistryFacadeImpl {
    pub fn new(event_repository: Arc<dyn EventRepository>, retry_policy: RetryPolicy) -> Self {
        Self {
            event_repository,
            retry_policy,
        }
    }
}

#[async_trait]
impl EventRegistryFacade for EventRegistryFacadeImpl {
    async fn load_event(&self, event_id: Uuid) -> Result<Event, WorkflowDomainError> {
        self.retry_policy
            .run("events.find_by_id", || self.event_repository.find_by_id(event_id))
            .await?
            .ok_or_else(|| WorkflowDomainError::NotFound("event".to_string()))
    }

    async fn reopen_for_review(
        &self,
        event_id: Uuid,
        observed_cycle: i32,
    ) -> Result<Option<Event>, WorkflowDomainError> {
        self.retry_policy
            .run_once(
                "events.reopen_for_review",
                self.event_repository.reopen_for_review(event_id, observed_cycle),
            )
            .await
    }

    async fn assign_venue(
        &self,
        event_id: Uuid,
        venue_id: Uuid,
    ) -> Result<Option<Event>, WorkflowDomainError> {
        self.retry_policy
            .run_once(
                "events.assign_venue",
                self.event_repository.assign_venue(event_id, venue_id),
            )
            .await
    }
}
