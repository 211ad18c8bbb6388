use async_trait::async_trait;

use crate::{
    notifications::domain::model::{
        commands::{
            mark_all_notifications_read_command::MarkAllNotificationsReadCommand,
            mark_notification_read_command::MarkNotificationReadCommand,
        },
        entities::inbox_notification::InboxNotification,
    },
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

#[async_trait]
pub trait InboxCommandService: Send + Sync {
    /// Marking an already read notification keeps its first `read_at`.
    async fn handle_mark_read(
        &self,
        command: MarkNotificationReadCommand,
    ) -> Result<InboxNotification, WorkflowDomainError>;

    /// Returns how many notifications changed from unread to read.
    async fn handle_mark_all_read(
        &self,
        command: MarkAllNotificationsReadCommand,
    ) -> Result<u64, WorkflowDomainError>;
}
