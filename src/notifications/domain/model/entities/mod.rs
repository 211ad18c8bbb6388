pub mod inbox_notification;
