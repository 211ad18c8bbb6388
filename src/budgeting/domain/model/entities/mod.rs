pub mod budget_category;
pub mod budget_line;
