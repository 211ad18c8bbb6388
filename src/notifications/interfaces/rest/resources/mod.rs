pub mod inbox_notification_resource;
