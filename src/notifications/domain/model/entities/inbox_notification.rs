use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    iam_integration::domain::model::value_objects::principal_id::PrincipalId,
    notifications::domain::model::enums::notification_template_key::NotificationTemplateKey,
};

/// A delivered notification as its recipient sees it.
#[derive(Clone, Debug, PartialEq)]
pub struct InboxNotification {
    id: Uuid,
    recipient_id: PrincipalId,
    template_key: NotificationTemplateKey,
    payload: Value,
    created_at: DateTime<Utc>,
    read_at: Option<DateTime<Utc>>,
}

impl InboxNotification {
    pub fn restore(
        id: Uuid,
        recipient_id: PrincipalId,
        template_key: NotificationTemplateKey,
        payload: Value,
        created_at: DateTime<Utc>,
        read_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            recipient_id,
            template_key,
            payload,
            created_at,
            read_at,
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

    pub fn read_at(&self) -> Option<DateTime<Utc>> {
        self.read_at
    }

    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }
}
