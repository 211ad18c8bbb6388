pub mod expense_ledger;
