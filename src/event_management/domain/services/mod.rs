pub mod event_command_service;
pub mod event_query_service;
