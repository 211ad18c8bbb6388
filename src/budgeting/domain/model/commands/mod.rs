pub mod submit_budget_command;
