pub mod get_event_query;
pub mod list_events_query;
