use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    notifications::{
        domain::model::value_objects::notification_intent::NotificationIntent,
        infrastructure::persistence::repositories::notification_delivery_repository::NotificationDeliveryRepository,
    },
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

pub struct SqlxNotificationDeliveryRepositoryImpl {
    pool: PgPool,
}

impl SqlxNotificationDeliveryRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationDeliveryRepository for SqlxNotificationDeliveryRepositoryImpl {
    async fn deliver(&self, intent: &NotificationIntent) -> Result<(), WorkflowDomainError> {
        let statement = r#"
            INSERT INTO notifications (id, recipient_id, template_key, payload, created_at)
            SELECT $1, p.id, $3, $4, $5
            FROM principals p
            WHERE p.id = $2 AND p.is_active
            ON CONFLICT (id) DO NOTHING
        "#;

        sqlx::query(statement)
            .bind(intent.id())
            .bind(intent.recipient_id().value())
            .bind(intent.template_key().as_str())
            .bind(sqlx::types::Json(intent.payload()))
            .bind(intent.created_at())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
