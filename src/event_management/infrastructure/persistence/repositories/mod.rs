pub mod event_repository;
pub mod postgres;
