use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    access_control::{
        domain::model::enums::capability_action::CapabilityAction,
        interfaces::acl::access_control_facade::{
            AccessControlFacade, AccessControlPermissionRequest, require_permission,
        },
    },
    budgeting::domain::services::budget_category_catalog::BudgetCategoryCatalog,
    event_management::{
        domain::model::entities::event::Event,
        interfaces::acl::event_registry_facade::EventRegistryFacade,
    },
    notifications::{
        domain::model::events::workflow_outcome::WorkflowOutcome,
        interfaces::acl::notification_facade::NotificationFacade,
    },
    shared::{
        application::retry_policy::RetryPolicy,
        domain::model::enums::workflow_domain_error::WorkflowDomainError,
    },
    venue_gate::{
        domain::{
            model::{
                commands::{
                    assign_venue_command::AssignVenueCommand,
                    record_expense_command::RecordExpenseCommand,
                },
                entities::expense::Expense,
            },
            services::{
                resource_gate::ResourceGate, venue_gate_command_service::VenueGateCommandService,
            },
        },
        infrastructure::persistence::repositories::{
            expense_repository::{ExpenseRepository, ExpenseWriteOutcome},
            venue_repository::VenueRepository,
        },
    },
};

pub struct VenueGateCommandServiceImpl {
    venue_repository: Arc<dyn VenueRepository>,
    expense_repository: Arc<dyn ExpenseRepository>,
    event_registry: Arc<dyn EventRegistryFacade>,
    access_control: Arc<dyn AccessControlFacade>,
    notifications: Arc<dyn NotificationFacade>,
    catalog: BudgetCategoryCatalog,
    retry_policy: RetryPolicy,
}

impl VenueGateCommandServiceImpl {
    pub fn new(
        venue_repository: Arc<dyn VenueRepository>,
        expense_repository: Arc<dyn ExpenseRepository>,
        event_registry: Arc<dyn EventRegistryFacade>,
        access_control: Arc<dyn AccessControlFacade>,
        notifications: Arc<dyn NotificationFacade>,
        catalog: BudgetCategoryCatalog,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            venue_repository,
            expense_repository,
            event_registry,
            access_control,
            notifications,
            catalog,
            retry_policy,
        }
    }
}

#[async_trait]
impl VenueGateCommandService for VenueGateCommandServiceImpl {
    async fn handle_assign_venue(
        &self,
        command: AssignVenueCommand,
    ) -> Result<Event, WorkflowDomainError> {
        let event = self.event_registry.load_event(command.event_id()).await?;

        require_permission(
            self.access_control.as_ref(),
            AccessControlPermissionRequest::new(*command.principal(), CapabilityAction::AssignVenue)
                .on_resource(event.ownership()),
        )
        .await?;

        ResourceGate::ensure_unlocked(&event, "venue assignment")?;

        let venue_id = command.venue_id();
        let venue = self
            .retry_policy
            .run("venues.find_active_by_id", || {
                self.venue_repository.find_active_by_id(venue_id)
            })
            .await?
            .ok_or_else(|| WorkflowDomainError::NotFound("venue".to_string()))?;

        let expected = event.details().expected_participants();
        if !venue.can_host(expected) {
            return Err(WorkflowDomainError::InvalidInput(format!(
                "venue {} holds {} people but the event expects {}",
                venue.name(),
                venue.capacity().unwrap_or_default(),
                expected.unwrap_or_default()
            )));
        }

        let updated = self
            .event_registry
            .assign_venue(event.id(), venue.id())
            .await?
            .ok_or_else(|| {
                WorkflowDomainError::InvalidState(
                    "event left APPROVED before the venue could be assigned".to_string(),
                )
            })?;

        tracing::info!(
            event_id = %updated.id(),
            venue_id = %venue.id(),
            principal_id = %command.principal().id(),
            "venue assigned"
        );

        self.notifications.publish(WorkflowOutcome::VenueAssigned {
            subject: updated.outcome_subject(),
            venue_id: venue.id(),
            venue_name: venue.name().to_string(),
        });

        Ok(updated)
    }

    async fn handle_record_expense(
        &self,
        command: RecordExpenseCommand,
    ) -> Result<Expense, WorkflowDomainError> {
        let event = self.event_registry.load_event(command.event_id()).await?;

        require_permission(
            self.access_control.as_ref(),
            AccessControlPermissionRequest::new(
                *command.principal(),
                CapabilityAction::RecordExpense,
            )
            .on_resource(event.ownership()),
        )
        .await?;

        ResourceGate::ensure_unlocked(&event, "expense entry")?;
        self.catalog.ensure_known(command.category_id())?;

        let expense = Expense::new(
            event.id(),
            command.category_id(),
            command.item_name().to_string(),
            command.amount(),
            command.principal().id(),
            Utc::now(),
        );

        let outcome = self
            .retry_policy
            .run_once(
                "expenses.insert_while_approved",
                self.expense_repository.insert_while_approved(&expense),
            )
            .await?;

        if outcome == ExpenseWriteOutcome::EventNotApproved {
            return Err(WorkflowDomainError::InvalidState(
                "event left APPROVED before the expense could be recorded".to_string(),
            ));
        }

        tracing::info!(
            event_id = %event.id(),
            expense_id = %expense.id(),
            amount = %expense.amount(),
            principal_id = %command.principal().id(),
            "expense recorded"
        );

        self.notifications.publish(WorkflowOutcome::ExpenseRecorded {
            subject: event.outcome_subject(),
            expense_id: expense.id(),
            item_name: expense.item_name().to_string(),
            amount: expense.amount().value(),
        });

        Ok(expense)
    }
}
