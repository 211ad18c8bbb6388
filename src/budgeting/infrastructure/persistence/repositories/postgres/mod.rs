pub mod sqlx_budget_category_repository_impl;
pub mod sqlx_budget_line_repository_impl;
