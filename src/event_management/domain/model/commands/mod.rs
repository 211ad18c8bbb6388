pub mod complete_event_command;
pub mod create_event_command;
pub mod update_event_command;
