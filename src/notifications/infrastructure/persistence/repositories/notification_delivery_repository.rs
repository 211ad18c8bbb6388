use async_trait::async_trait;

use crate::{
    notifications::domain::model::value_objects::notification_intent::NotificationIntent,
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

#[async_trait]
pub trait NotificationDeliveryRepository: Send + Sync {
    /// Stores the intent in the recipient's inbox. Redelivering an intent that
    /// was already stored is a no-op, and inactive recipients are skipped.
    async fn deliver(&self, intent: &NotificationIntent) -> Result<(), WorkflowDomainError>;
}
