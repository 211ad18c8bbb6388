pub mod budget_category_repository;
pub mod budget_line_repository;
pub mod postgres;
