pub mod approval_query_service_impl;
