pub mod budget_category_catalog;
pub mod budget_command_service;
pub mod budget_query_service;
