pub mod approval_command_service_impl;
