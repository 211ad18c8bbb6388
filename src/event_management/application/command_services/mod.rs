pub mod event_command_service_impl;
