pub mod sqlx_expense_repository_impl;
pub mod sqlx_venue_repository_impl;
