pub mod postgres;
pub mod principal_directory_repository;
