pub mod expense_repository;
pub mod postgres;
pub mod venue_repository;
