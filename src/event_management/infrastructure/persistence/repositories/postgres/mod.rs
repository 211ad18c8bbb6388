pub mod sqlx_event_repository_impl;
