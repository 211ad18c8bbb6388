pub mod assign_venue_command;
pub mod record_expense_command;
