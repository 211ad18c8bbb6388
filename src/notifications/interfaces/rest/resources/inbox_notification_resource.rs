use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::notifications::domain::model::{
    entities::inbox_notification::InboxNotification, value_objects::inbox_view::InboxView,
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct InboxNotificationResource {
    pub id: String,
    pub template_key: String,
    #[schema(value_type = Object)]
    pub payload: serde_json::Value,
    pub created_at: String,
    pub read_at: Option<String>,
}

impl From<InboxNotification> for InboxNotificationResource {
    fn from(notification: InboxNotification) -> Self {
        Self {
            id: notification.id().to_string(),
            template_key: notification.template_key().as_str().to_string(),
            payload: notification.payload().clone(),
            created_at: notification.created_at().to_rfc3339(),
            read_at: notification.read_at().map(|at| at.to_rfc3339()),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct InboxResource {
    pub notifications: Vec<InboxNotificationResource>,
    pub unread_count: u64,
}

impl From<InboxView> for InboxResource {
    fn from(view: InboxView) -> Self {
        Self {
            notifications: view
                .notifications
                .into_iter()
                .map(InboxNotificationResource::from)
                .collect(),
            unread_count: view.unread_count,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ListInboxQueryResource {
    #[serde(default)]
    pub unread_only: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MarkAllReadResponseResource {
    pub marked: u64,
}
