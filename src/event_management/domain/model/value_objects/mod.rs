pub mod event_details;
pub mod event_name;
