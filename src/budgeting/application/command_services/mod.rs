pub mod budget_command_service_impl;
