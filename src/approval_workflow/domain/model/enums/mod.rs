pub mod budget_decision;
