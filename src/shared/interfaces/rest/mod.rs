pub mod error_mapping;
pub mod openapi;
pub mod path_params;
pub mod resources;
