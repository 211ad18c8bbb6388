pub mod list_inbox_query;
