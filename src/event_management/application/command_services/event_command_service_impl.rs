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
    event_management::{
        domain::{
            model::{
                commands::{
                    complete_event_command::CompleteEventCommand,
                    create_event_command::CreateEventCommand,
                    update_event_command::UpdateEventCommand,
                },
                entities::event::Event,
                enums::event_status::EventStatus,
            },
            services::event_command_service::EventCommandService,
        },
        infrastructure::persistence::repositories::event_repository::EventRepository,
    },
    iam_integration::{
        domain::model::value_objects::principal_id::PrincipalId,
        infrastructure::persistence::repositories::principal_directory_repository::PrincipalDirectoryRepository,
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

pub struct EventCommandServiceImpl {
    event_repository: Arc<dyn EventRepository>,
    directory_repository: Arc<dyn PrincipalDirectoryRepository>,
    access_control: Arc<dyn AccessControlFacade>,
    notifications: Arc<dyn NotificationFacade>,
    retry_policy: RetryPolicy,
}

impl EventCommandServiceImpl {
    pub fn new(
        event_repository: Arc<dyn EventRepository>,
        directory_repository: Arc<dyn PrincipalDirectoryRepository>,
        access_control: Arc<dyn AccessControlFacade>,
        notifications: Arc<dyn NotificationFacade>,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            event_repository,
            directory_repository,
            access_control,
            notifications,
            retry_policy,
        }
    }

    async fn ensure_coordinator(&self, coordinator_id: PrincipalId) -> Result<(), WorkflowDomainError> {
        let entry = self
            .retry_policy
            .run("principal_directory.find_by_id", || {
                self.directory_repository.find_by_id(coordinator_id)
            })
            .await?
            .filter(|entry| entry.is_active)
            .ok_or_else(|| {
                WorkflowDomainError::InvalidInput(format!(
                    "coordinator {coordinator_id} is not an active principal"
                ))
            })?;

        if !entry.principal.role().is_coordinator() {
            return Err(WorkflowDomainError::InvalidInput(format!(
                "principal {coordinator_id} has role {} and cannot coordinate events",
                entry.principal.role()
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl EventCommandService for EventCommandServiceImpl {
    async fn handle_create(&self, command: CreateEventCommand) -> Result<Event, WorkflowDomainError> {
        let principal = *command.principal();
        require_permission(
            self.access_control.as_ref(),
            AccessControlPermissionRequest::new(principal, CapabilityAction::CreateEvent),
        )
        .await?;

        if let Some(coordinator_id) = command.coordinator_id() {
            self.ensure_coordinator(coordinator_id).await?;
        }

        let event = Event::new_pending(
            command.details().clone(),
            principal.id(),
            command.coordinator_id(),
            Utc::now(),
        );

        self.retry_policy
            .run_once("events.insert", self.event_repository.insert(&event))
            .await?;

        tracing::info!(
            event_id = %event.id(),
            creator_id = %principal.id(),
            event_type = event.details().event_type().as_str(),
            "event created"
        );

        self.notifications.publish(WorkflowOutcome::EventCreated {
            subject: event.outcome_subject(),
        });

        Ok(event)
    }

    async fn handle_update(&self, command: UpdateEventCommand) -> Result<Event, WorkflowDomainError> {
        let event_id = command.event_id();
        let event = self
            .retry_policy
            .run("events.find_by_id", || self.event_repository.find_by_id(event_id))
            .await?
            .ok_or_else(|| WorkflowDomainError::NotFound("event".to_string()))?;

        require_permission(
            self.access_control.as_ref(),
            AccessControlPermissionRequest::new(*command.principal(), CapabilityAction::UpdateEvent)
                .on_resource(event.ownership()),
        )
        .await?;

        if let Some(coordinator_id) = command.coordinator_id() {
            self.ensure_coordinator(coordinator_id).await?;
        }

        let revised = event.revise(
            command.merge_into(event.details())?,
            command.coordinator_id().or(event.coordinator_id()),
        )?;

        let updated = self
            .retry_policy
            .run_once(
                "events.update_details",
                self.event_repository
                    .update_details(&revised, event.review_cycle()),
            )
            .await?
            .ok_or_else(|| {
                WorkflowDomainError::InvalidState(
                    "event left PENDING before the edit was applied".to_string(),
                )
            })?;

        tracing::info!(
            event_id = %event_id,
            principal_id = %command.principal().id(),
            "event details updated"
        );

        Ok(updated)
    }

    async fn handle_complete(
        &self,
        command: CompleteEventCommand,
    ) -> Result<Event, WorkflowDomainError> {
        let event_id = command.event_id();
        let event = self
            .retry_policy
            .run("events.find_by_id", || self.event_repository.find_by_id(event_id))
            .await?
            .ok_or_else(|| WorkflowDomainError::NotFound("event".to_string()))?;

        require_permission(
            self.access_control.as_ref(),
            AccessControlPermissionRequest::new(*command.principal(), CapabilityAction::AdminOverride)
                .on_resource(event.ownership()),
        )
        .await?;

        if !event.status().can_transition_to(EventStatus::Completed) {
            return Err(WorkflowDomainError::InvalidState(format!(
                "only APPROVED events can be completed, current status is {}",
                event.status()
            )));
        }

        let completed = self
            .retry_policy
            .run_once(
                "events.transition_status",
                self.event_repository.transition_status(
                    event_id,
                    EventStatus::Approved,
                    EventStatus::Completed,
                    event.review_cycle(),
                ),
            )
            .await?
            .ok_or_else(|| {
                WorkflowDomainError::InvalidState(
                    "event status changed before it could be completed".to_string(),
                )
            })?;

        tracing::info!(
            event_id = %event_id,
            principal_id = %command.principal().id(),
            "event completed"
        );

        Ok(completed)
    }
}
