pub mod assign_venue_request_resource;
pub mod expense_resource;
pub mod record_expense_request_resource;
pub mod venue_resource;
