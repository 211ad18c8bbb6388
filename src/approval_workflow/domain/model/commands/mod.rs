pub mod decide_budget_command;
pub mod resubmit_budget_command;
