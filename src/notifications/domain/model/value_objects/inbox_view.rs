use crate::notifications::domain::model::entities::inbox_notification::InboxNotification;

/// Newest first. `unread_count` covers the whole inbox, not just the listed
/// rows.
#[derive(Clone, Debug, PartialEq)]
pub struct InboxView {
    pub notifications: Vec<InboxNotification>,
    pub unread_count: u64,
}
