pub mod budget_amount;
pub mod budget_line_draft;
pub mod budget_summary;
