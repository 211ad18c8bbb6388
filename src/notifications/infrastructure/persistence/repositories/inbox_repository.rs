use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    iam_integration::domain::model::value_objects::principal_id::PrincipalId,
    notifications::domain::model::entities::inbox_notification::InboxNotification,
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

/// Every operation is scoped to one recipient; rows addressed to someone
/// else behave as if they did not exist.
#[async_trait]
pub trait InboxRepository: Send + Sync {
    async fn list_for_recipient(
        &self,
        recipient_id: PrincipalId,
        unread_only: bool,
    ) -> Result<Vec<InboxNotification>, WorkflowDomainError>;

    async fn count_unread(&self, recipient_id: PrincipalId) -> Result<u64, WorkflowDomainError>;

    async fn mark_read(
        &self,
        notification_id: Uuid,
        recipient_id: PrincipalId,
        read_at: DateTime<Utc>,
    ) -> Result<Option<InboxNotification>, WorkflowDomainError>;

    async fn mark_all_read(
        &self,
        recipient_id: PrincipalId,
        read_at: DateTime<Utc>,
    ) -> Result<u64, WorkflowDomainError>;
}
