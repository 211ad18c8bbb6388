use async_trait::async_trait;

use crate::{
    event_management::domain::model::entities::event::Event,
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
    venue_gate::domain::model::{
        commands::{
            assign_venue_command::AssignVenueCommand,
            record_expense_command::RecordExpenseCommand,
        },
        entities::expense::Expense,
    },
};

#[async_trait]
pub trait VenueGateCommandService: Send + Sync {
    async fn handle_assign_venue(
        &self,
        command: AssignVenueCommand,
    ) -> Result<Event, WorkflowDomainError>;

    async fn handle_record_expense(
        &self,
        command: RecordExpenseCommand,
    ) -> Result<Expense, WorkflowDomainError>;
}
