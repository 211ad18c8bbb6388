use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::{
    notifications::{
        domain::{
            model::{
                commands::{
                    mark_all_notifications_read_command::MarkAllNotificationsReadCommand,
                    mark_notification_read_command::MarkNotificationReadCommand,
                },
                entities::inbox_notification::InboxNotification,
            },
            services::inbox_command_service::InboxCommandService,
        },
        infrastructure::persistence::repositories::inbox_repository::InboxRepository,
    },
    shared::{
        application::retry_policy::RetryPolicy,
        domain::model::enums::workflow_domain_error::WorkflowDomainError,
    },
};

pub struct InboxCommandServiceImpl {
    inbox_repository: Arc<dyn InboxRepository>,
    retry_policy: RetryPolicy,
}

impl InboxCommandServiceImpl {
    pub fn new(inbox_repository: Arc<dyn InboxRepository>, retry_policy: RetryPolicy) -> Self {
        Self {
            inbox_repository,
            retry_policy,
        }
    }
}

#[async_trait]
impl InboxCommandService for InboxCommandServiceImpl {
    async fn handle_mark_read(
        &self,
        command: MarkNotificationReadCommand,
    ) -> Result<InboxNotification, WorkflowDomainError> {
        let recipient_id = command.principal().id();
        let notification_id = command.notification_id();
        let read_at = Utc::now();

        // COALESCE keeps the first read time, so replaying the write is safe.
        self.retry_policy
            .run("notifications.mark_read", || {
                self.inbox_repository
                    .mark_read(notification_id, recipient_id, read_at)
            })
            .await?
            .ok_or_else(|| WorkflowDomainError::NotFound("notification".to_string()))
    }

    async fn handle_mark_all_read(
        &self,
        command: MarkAllNotificationsReadCommand,
    ) -> Result<u64, WorkflowDomainError> {
        let recipient_id = command.principal().id();

        let marked = self
            .retry_policy
            .run_once(
                "notifications.mark_all_read",
                self.inbox_repository.mark_all_read(recipient_id, Utc::now()),
            )
            .await?;

        tracing::debug!(recipient_id = %recipient_id, marked, "inbox marked as read");
        Ok(marked)
    }
}
