use rust_decimal::Decimal;

use crate::venue_gate::domain::model::entities::expense::Expense;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
    spent_total: Decimal,
}

impl ExpenseLedger {
    pub fn new(expenses: Vec<Expense>) -> Self {
        let spent_total = expenses.iter().map(|e| e.amount().value()).sum();
        Self {
            expenses,
            spent_total,
        }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn spent_total(&self) -> Decimal {
        self.spent_total
    }
}
