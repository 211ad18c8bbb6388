pub mod inbox_query_service_impl;
