pub mod create_event_request_resource;
pub mod event_resource;
pub mod update_event_request_resource;
