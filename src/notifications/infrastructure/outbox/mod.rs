pub mod mpsc_notification_outbox_impl;
pub mod notification_outbox;
