pub mod budget_query_service_impl;
