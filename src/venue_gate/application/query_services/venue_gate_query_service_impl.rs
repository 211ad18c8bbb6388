use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    access_control::{
        domain::model::enums::capability_action::CapabilityAction,
        interfaces::acl::access_control_facade::{
            AccessControlFacade, AccessControlPermissionRequest, require_permission,
        },
    },
    event_management::interfaces::acl::event_registry_facade::EventRegistryFacade,
    shared::{
        application::retry_policy::RetryPolicy,
        domain::model::enums::workflow_domain_error::WorkflowDomainError,
    },
    venue_gate::{
        domain::{
            model::{
                entities::venue::Venue, queries::list_expenses_query::ListExpensesQuery,
                value_objects::expense_ledger::ExpenseLedger,
            },
            services::venue_gate_query_service::VenueGateQueryService,
        },
        infrastructure::persistence::repositories::{
            expense_repository::ExpenseRepository, venue_repository::VenueRepository,
        },
    },
};

pub struct VenueGateQueryServiceImpl {
    venue_repository: Arc<dyn VenueRepository>,
    expense_repository: Arc<dyn ExpenseRepository>,
    event_registry: Arc<dyn EventRegistryFacade>,
    access_control: Arc<dyn AccessControlFacade>,
    retry_policy: RetryPolicy,
}

impl VenueGateQueryServiceImpl {
    pub fn new(
        venue_repository: Arc<dyn VenueRepository>,
        expense_repository: Arc<dyn ExpenseRepository>,
        event_registry: Arc<dyn EventRegistryFacade>,
        access_control: Arc<dyn AccessControlFacade>,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            venue_repository,
            expense_repository,
            event_registry,
            access_control,
            retry_policy,
        }
    }
}

#[async_trait]
impl VenueGateQueryService for VenueGateQueryServiceImpl {
    async fn handle_list_expenses(
        &self,
        query: ListExpensesQuery,
    ) -> Result<ExpenseLedger, WorkflowDomainError> {
        let event = self.event_registry.load_event(query.event_id()).await?;

        require_permission(
            self.access_control.as_ref(),
            AccessControlPermissionRequest::new(*query.principal(), CapabilityAction::ViewEvent)
                .on_resource(event.ownership()),
        )
        .await?;

        let expenses = self
            .retry_policy
            .run("expenses.list_by_event", || {
                self.expense_repository.list_by_event(event.id())
            })
            .await?;

        Ok(ExpenseLedger::new(expenses))
    }

    async fn handle_list_venues(&self) -> Result<Vec<Venue>, WorkflowDomainError> {
        self.retry_policy
            .run("venues.list_active", || self.venue_repository.list_active())
            .await
    }
}
