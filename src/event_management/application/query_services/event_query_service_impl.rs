use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    access_control::{
        domain::model::enums::capability_action::CapabilityAction,
        interfaces::acl::access_control_facade::{
            AccessControlFacade, AccessControlPermissionRequest, require_permission,
        },
    },
    event_management::{
        domain::{
            model::{
                entities::event::Event,
                queries::{get_event_query::GetEventQuery, list_events_query::ListEventsQuery},
            },
            services::event_query_service::EventQueryService,
        },
        infrastructure::persistence::repositories::event_repository::EventRepository,
    },
    shared::{
        application::retry_policy::RetryPolicy,
        domain::model::enums::workflow_domain_error::WorkflowDomainError,
    },
};

pub struct EventQueryServiceImpl {
    event_repository: Arc<dyn EventRepository>,
    access_control: Arc<dyn AccessControlFacade>,
    retry_policy: RetryPolicy,
}

impl EventQueryServiceImpl {
    pub fn new(
        event_repository: Arc<dyn EventRepository>,
        access_control: Arc<dyn AccessControlFacade>,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            event_repository,
            access_control,
            retry_policy,
        }
    }
}

#[async_trait]
impl EventQueryService for EventQueryServiceImpl {
    async fn handle_get(&self, query: GetEventQuery) -> Result<Event, WorkflowDomainError> {
        let event_id = query.event_id();
        let event = self
            .retry_policy
            .run("events.find_by_id", || self.event_repository.find_by_id(event_id))
            .await?
            .ok_or_else(|| WorkflowDomainError::NotFound("event".to_string()))?;

        require_permission(
            self.access_control.as_ref(),
            AccessControlPermissionRequest::new(*query.principal(), CapabilityAction::ViewEvent)
                .on_resource(event.ownership()),
        )
        .await?;

        Ok(event)
    }

    async fn handle_list(&self, query: ListEventsQuery) -> Result<Vec<Event>, WorkflowDomainError> {
        let visibility = query.visibility();
        let status = query.status();

        self.retry_policy
            .run("events.list_visible", || {
                self.event_repository.list_visible(visibility, status)
            })
            .await
    }
}
