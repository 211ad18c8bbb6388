pub mod evaluate_permission_query;
