pub mod sqlx_inbox_repository_impl;
pub mod sqlx_notification_delivery_repository_impl;
