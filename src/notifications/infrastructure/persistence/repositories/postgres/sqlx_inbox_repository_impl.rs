use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::{
    iam_integration::domain::model::value_objects::principal_id::PrincipalId,
    notifications::{
        domain::model::{
            entities::inbox_notification::InboxNotification,
            enums::notification_template_key::NotificationTemplateKey,
        },
        infrastructure::persistence::repositories::inbox_repository::InboxRepository,
    },
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

const NOTIFICATION_COLUMNS: &str = "id, recipient_id, template_key, payload, created_at, read_at";

pub struct SqlxInboxRepositoryImpl {
    pool: PgPool,
}

impl SqlxInboxRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<InboxNotification, WorkflowDomainError> {
        let id: Uuid = row.try_get("id")?;
        let recipient_id: Uuid = row.try_get("recipient_id")?;
        let template_raw: String = row.try_get("template_key")?;
        let payload: sqlx::types::Json<Value> = row.try_get("payload")?;
        let created_at: DateTime<Utc> = row.try_get("created_at")?;
        let read_at: Option<DateTime<Utc>> = row.try_get("read_at")?;

        let template_key = NotificationTemplateKey::from_str(&template_raw).map_err(|_| {
            WorkflowDomainError::SystemFailure(format!(
                "unknown notification template stored: {template_raw}"
            ))
        })?;

        Ok(InboxNotification::restore(
            id,
            PrincipalId::from_uuid(recipient_id),
            template_key,
            payload.0,
            created_at,
            read_at,
        ))
    }
}

#[async_trait]
impl InboxRepository for SqlxInboxRepositoryImpl {
    async fn list_for_recipient(
        &self,
        recipient_id: PrincipalId,
        unread_only: bool,
    ) -> Result<Vec<InboxNotification>, WorkflowDomainError> {
        let statement = format!(
            r#"
            SELECT {NOTIFICATION_COLUMNS}
            FROM notifications
            WHERE recipient_id = $1 AND (NOT $2 OR read_at IS NULL)
            ORDER BY created_at DESC, id DESC
            "#
        );

        let rows = sqlx::query(&statement)
            .bind(recipient_id.value())
            .bind(unread_only)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }

    async fn count_unread(&self, recipient_id: PrincipalId) -> Result<u64, WorkflowDomainError> {
        let unread: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE recipient_id = $1 AND read_at IS NULL",
        )
        .bind(recipient_id.value())
        .fetch_one(&self.pool)
        .await?;

        Ok(unread.max(0) as u64)
    }

    async fn mark_read(
        &self,
        notification_id: Uuid,
        recipient_id: PrincipalId,
        read_at: DateTime<Utc>,
    ) -> Result<Option<InboxNotification>, WorkflowDomainError> {
        let statement = format!(
            r#"
            UPDATE notifications
            SET read_at = COALESCE(read_at, $3)
            WHERE id = $1 AND recipient_id = $2
            RETURNING {NOTIFICATION_COLUMNS}
            "#
        );

        let maybe_row = sqlx::query(&statement)
            .bind(notification_id)
            .bind(recipient_id.value())
            .bind(read_at)
            .fetch_optional(&self.pool)
            .await?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn mark_all_read(
        &self,
        recipient_id: PrincipalId,
        read_at: DateTime<Utc>,
    ) -> Result<u64, WorkflowDomainError> {
        let result = sqlx::query(
            "UPDATE notifications SET read_at = $2 WHERE recipient_id = $1 AND read_at IS NULL",
        )
        .bind(recipient_id.value())
        .bind(read_at)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
