pub mod inbox_repository;
pub mod notification_delivery_repository;
pub mod postgres;
