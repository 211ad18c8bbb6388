use async_trait::async_trait;

use crate::{
    event_management::domain::model::{
        commands::{
            complete_event_command::CompleteEventCommand, create_event_command::CreateEventCommand,
            update_event_command::UpdateEventCommand,
        },
        entities::event::Event,
    },
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

#[async_trait]
pub trait EventCommandService: Send + Sync {
    async fn handle_create(&self, command: CreateEventCommand) -> Result<Event, WorkflowDomainError>;

    async fn handle_update(&self, command: UpdateEventCommand) -> Result<Event, WorkflowDomainError>;

    async fn handle_complete(
        &self,
        command: CompleteEventCommand,
    ) -> Result<Event, WorkflowDomainError>;
}
