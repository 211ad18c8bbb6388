pub mod approval_record_resource;
pub mod decide_budget_request_resource;
