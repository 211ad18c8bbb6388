use async_trait::async_trait;

use crate::{
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
    venue_gate::domain::model::{
        entities::venue::Venue, queries::list_expenses_query::ListExpensesQuery,
        value_objects::expense_ledger::ExpenseLedger,
    },
};

#[async_trait]
pub trait VenueGateQueryService: Send + Sync {
    async fn handle_list_expenses(
        &self,
        query: ListExpensesQuery,
    ) -> Result<ExpenseLedger, WorkflowDomainError>;

    async fn handle_list_venues(&self) -> Result<Vec<Venue>, WorkflowDomainError>;
}
