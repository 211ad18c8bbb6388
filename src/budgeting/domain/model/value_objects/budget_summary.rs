use rust_decimal::Decimal;

use crate::budgeting::domain::model::entities::budget_line::BudgetLine;

/// Lines of one event with totals derived on read.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BudgetSummary {
    lines: Vec<BudgetLine>,
    requested_total: Decimal,
    sponsor_total: Decimal,
}

impl BudgetSummary {
    pub fn from_lines(lines: Vec<BudgetLine>) -> Self {
        let requested_total = lines.iter().map(|l| l.amount().value()).sum();
        let sponsor_total = lines.iter().map(|l| l.sponsor_contribution().value()).sum();

        Self {
            lines,
            requested_total,
            sponsor_total,
        }
    }

    pub fn lines(&self) -> &[BudgetLine] {
        &self.lines
    }

    pub fn requested_total(&self) -> Decimal {
        self.requested_total
    }

    pub fn sponsor_total(&self) -> Decimal {
        self.sponsor_total
    }

    pub fn net_requested(&self) -> Decimal {
        self.requested_total - self.sponsor_total
    }
}
