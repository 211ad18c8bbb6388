pub mod budget_category_resource;
pub mod budget_line_resource;
pub mod submit_budget_request_resource;
