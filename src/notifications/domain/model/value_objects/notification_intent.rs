use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    iam_integration::domain::model::value_objects::principal_id::PrincipalId,
    notifications::domain::model::enums::notification_template_key::NotificationTemplateKey,
};

/// A request to notify one principal. The id is assigned once at dispatch so
/// redelivery of the same intent is idempotent.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationIntent {
    id: Uuid,
    recipient_id: PrincipalId,
    template_key: NotificationTemplateKey,
    payload: Value,
    created_at: DateTime<Utc>,
}

impl NotificationIntent {
    pub fn new(recipient_id: PrincipalId, template_key: NotificationTemplateKey, payload: Value) -> Self {
        Self {
            id: Uuid::now_v7(),
            recipient_id,
            template_key,
            payload,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn recipient_id(&self) -> PrincipalId {
        self.recipient_id
    }

    pub fn template_key(&self) -> NotificationTemplateKey {
        self.template_key
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
