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
    approval_workflow::{
        domain::{
            model::{
                commands::{
                    decide_budget_command::DecideBudgetCommand,
                    resubmit_budget_command::ResubmitBudgetCommand,
                },
                entities::approval_record::ApprovalRecord,
            },
            services::approval_command_service::ApprovalCommandService,
        },
        infrastructure::persistence::repositories::approval_record_repository::{
            ApprovalRecordRepository, DecisionWriteOutcome,
        },
    },
    event_management::{
        domain::model::{entities::event::Event, enums::event_status::EventStatus},
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

pub struct ApprovalCommandServiceImpl {
    approval_record_repository: Arc<dyn ApprovalRecordRepository>,
    event_registry: Arc<dyn EventRegistryFacade>,
    access_control: Arc<dyn AccessControlFacade>,
    notifications: Arc<dyn NotificationFacade>,
    retry_policy: RetryPolicy,
}

impl ApprovalCommandServiceImpl {
    pub fn new(
        approval_record_repository: Arc<dyn ApprovalRecordRepository>,
        event_registry: Arc<dyn EventRegistryFacade>,
        access_control: Arc<dyn AccessControlFacade>,
        notifications: Arc<dyn NotificationFacade>,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            approval_record_repository,
            event_registry,
            access_control,
            notifications,
            retry_policy,
        }
    }
}

#[async_trait]
impl ApprovalCommandService for ApprovalCommandServiceImpl {
    async fn handle_decide(
        &self,
        command: DecideBudgetCommand,
    ) -> Result<ApprovalRecord, WorkflowDomainError> {
        let event = self.event_registry.load_event(command.event_id()).await?;
        let reviewer = *command.principal();

        require_permission(
            self.access_control.as_ref(),
            AccessControlPermissionRequest::new(reviewer, CapabilityAction::ReviewBudget)
                .on_resource(event.ownership()),
        )
        .await?;

        if event.status() != EventStatus::Pending {
            return Err(WorkflowDomainError::AlreadyDecided);
        }

        let record = ApprovalRecord::new(
            event.id(),
            reviewer.id(),
            command.decision(),
            command.remarks().clone(),
            event.review_cycle(),
            Utc::now(),
        );

        let outcome = self
            .retry_policy
            .run_once(
                "approval_records.record_decision",
                self.approval_record_repository.record_decision(&record),
            )
            .await?;

        if outcome == DecisionWriteOutcome::PreconditionFailed {
            tracing::info!(
                event_id = %event.id(),
                reviewer_id = %reviewer.id(),
                review_cycle = event.review_cycle(),
                "decision lost the conditional write"
            );
            return Err(WorkflowDomainError::AlreadyDecided);
        }

        tracing::info!(
            event_id = %event.id(),
            reviewer_id = %reviewer.id(),
            decision = record.decision().as_str(),
            review_cycle = record.review_cycle(),
            "budget decided"
        );

        self.notifications.publish(WorkflowOutcome::BudgetDecided {
            subject: event.outcome_subject(),
            decision: record.decision().as_str().to_string(),
            remarks: record.remarks().value().to_string(),
            reviewer_id: reviewer.id(),
            review_cycle: record.review_cycle(),
        });

        Ok(record)
    }

    async fn handle_resubmit(
        &self,
        command: ResubmitBudgetCommand,
    ) -> Result<Event, WorkflowDomainError> {
        let event = self.event_registry.load_event(command.event_id()).await?;

        require_permission(
            self.access_control.as_ref(),
            AccessControlPermissionRequest::new(*command.principal(), CapabilityAction::SubmitBudget)
                .on_resource(event.ownership()),
        )
        .await?;

        if event.status() != EventStatus::Rejected {
            return Err(WorkflowDomainError::InvalidState(format!(
                "only REJECTED events can be resubmitted, current status is {}",
                event.status()
            )));
        }

        let reopened = self
            .event_registry
            .reopen_for_review(event.id(), event.review_cycle())
            .await?
            .ok_or(WorkflowDomainError::AlreadyDecided)?;

        tracing::info!(
            event_id = %reopened.id(),
            principal_id = %command.principal().id(),
            review_cycle = reopened.review_cycle(),
            "budget resubmitted for review"
        );

        self.notifications.publish(WorkflowOutcome::BudgetResubmitted {
            subject: reopened.outcome_subject(),
            review_cycle: reopened.review_cycle(),
            note: command.note().map(str::to_string),
        });

        Ok(reopened)
    }
}
