pub mod list_expenses_query;
