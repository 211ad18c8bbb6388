pub mod authorization_matrix_entry_resource;
pub mod evaluate_permission_request_resource;
