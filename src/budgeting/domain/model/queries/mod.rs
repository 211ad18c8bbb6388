pub mod get_budget_query;
