pub mod event_status;
pub mod event_type;
pub mod event_visibility;
