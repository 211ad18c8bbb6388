use async_trait::async_trait;

use crate::{
    event_management::domain::model::{
        entities::event::Event,
        queries::{get_event_query::GetEventQuery, list_events_query::ListEventsQuery},
    },
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

#[async_trait]
pub trait EventQueryService: Send + Sync {
    async fn handle_get(&self, query: GetEventQuery) -> Result<Event, WorkflowDomainError>;

    async fn handle_list(&self, query: ListEventsQuery) -> Result<Vec<Event>, WorkflowDomainError>;
}
