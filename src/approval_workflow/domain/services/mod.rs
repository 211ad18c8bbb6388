pub mod approval_command_service;
pub mod approval_query_service;
