use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use crate::{
    access_control::{
        domain::model::enums::capability_action::CapabilityAction,
        interfaces::acl::access_control_facade::{
            AccessControlFacade, AccessControlPermissionRequest, require_permission,
        },
    },
    budgeting::{
        domain::{
            model::{
                commands::submit_budget_command::SubmitBudgetCommand,
                entities::budget_line::BudgetLine,
            },
            services::{
                budget_category_catalog::BudgetCategoryCatalog,
                budget_command_service::BudgetCommandService,
            },
        },
        infrastructure::persistence::repositories::budget_line_repository::{
            BudgetLineRepository, BudgetUpsertOutcome,
        },
    },
    event_management::{
        domain::model::enums::event_status::EventStatus,
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
};

pub struct BudgetCommandServiceImpl {
    budget_line_repository: Arc<dyn BudgetLineRepository>,
    event_registry: Arc<dyn EventRegistryFacade>,
    access_control: Arc<dyn AccessControlFacade>,
    notifications: Arc<dyn NotificationFacade>,
    catalog: BudgetCategoryCatalog,
    retry_policy: RetryPolicy,
}

impl BudgetCommandServiceImpl {
    pub fn new(
        budget_line_repository: Arc<dyn BudgetLineRepository>,
        event_registry: Arc<dyn EventRegistryFacade>,
        access_control: Arc<dyn AccessControlFacade>,
        notifications: Arc<dyn NotificationFacade>,
        catalog: BudgetCategoryCatalog,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            budget_line_repository,
            event_registry,
            access_control,
            notifications,
            catalog,
            retry_policy,
        }
    }
}

fn not_pending(status: EventStatus) -> WorkflowDomainError {
    WorkflowDomainError::InvalidState(format!(
        "budget lines can only change while the event is PENDING, current status is {status}"
    ))
}

#[async_trait]
impl BudgetCommandService for BudgetCommandServiceImpl {
    async fn handle_submit(
        &self,
        command: SubmitBudgetCommand,
    ) -> Result<Vec<BudgetLine>, WorkflowDomainError> {
        let event = self.event_registry.load_event(command.event_id()).await?;

        require_permission(
            self.access_control.as_ref(),
            AccessControlPermissionRequest::new(*command.principal(), CapabilityAction::SubmitBudget)
                .on_resource(event.ownership()),
        )
        .await?;

        if event.status() != EventStatus::Pending {
            return Err(not_pending(event.status()));
        }

        for draft in command.lines() {
            self.catalog.ensure_known(draft.category_id())?;
        }

        let updated_at = Utc::now();
        let mut lines: Vec<BudgetLine> = command
            .lines()
            .iter()
            .map(|draft| BudgetLine::from_draft(event.id(), draft, updated_at))
            .collect();
        lines.sort_by_key(|line| self.catalog.position(line.category_id()));

        let outcome = self
            .retry_policy
            .run("budget_lines.upsert", || {
                self.budget_line_repository
                    .upsert_lines_while_pending(event.id(), &lines)
            })
            .await?;

        match outcome {
            BudgetUpsertOutcome::Applied => {}
            BudgetUpsertOutcome::EventNotPending(status) => return Err(not_pending(status)),
            BudgetUpsertOutcome::EventMissing => {
                return Err(WorkflowDomainError::NotFound("event".to_string()));
            }
        }

        let requested_total: Decimal = lines.iter().map(|l| l.amount().value()).sum();
        tracing::info!(
            event_id = %event.id(),
            principal_id = %command.principal().id(),
            line_count = lines.len(),
            requested_total = %requested_total,
            "budget lines upserted"
        );

        if command.principal().role().is_team_lead() {
            self.notifications.publish(WorkflowOutcome::BudgetSubmitted {
                subject: event.outcome_subject(),
                requested_total,
                line_count: lines.len(),
            });
        }

        Ok(lines)
    }
}
