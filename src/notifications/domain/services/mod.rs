pub mod inbox_command_service;
pub mod inbox_query_service;
pub mod notification_dispatcher;
