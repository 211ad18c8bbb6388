pub mod mark_all_notifications_read_command;
pub mod mark_notification_read_command;
