pub mod list_approval_history_query;
