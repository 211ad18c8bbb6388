pub mod event_query_service_impl;
