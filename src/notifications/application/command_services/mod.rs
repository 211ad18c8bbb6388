pub mod inbox_command_service_impl;
