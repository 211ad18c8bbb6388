pub mod notification_delivery_worker;
