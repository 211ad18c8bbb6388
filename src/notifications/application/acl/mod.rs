pub mod notification_facade_impl;
