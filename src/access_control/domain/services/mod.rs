pub mod access_control_query_service;
pub mod authorization_matrix;
