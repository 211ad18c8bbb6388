pub mod notification_facade;
