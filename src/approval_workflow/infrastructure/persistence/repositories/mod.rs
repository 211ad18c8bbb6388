pub mod approval_record_repository;
pub mod postgres;
