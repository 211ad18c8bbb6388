use std::fmt;

use rust_decimal::Decimal;

use crate::shared::domain::model::enums::workflow_domain_error::WorkflowDomainError;

/// Non-negative money value with at most two fractional digits, bounded by
/// the `NUMERIC(14,2)` columns it is stored in.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BudgetAmount(Decimal);

impl BudgetAmount {
    pub const ZERO: Self = Self(Decimal::ZERO);
    pub const MAX_SCALE: u32 = 2;
    pub const MAX_CENTS: i64 = 99_999_999_999_999;

    pub fn max() -> Self {
        Self(Decimal::new(Self::MAX_CENTS, Self::MAX_SCALE))
    }

    pub fn new(value: Decimal, field: &str) -> Result<Self, WorkflowDomainError> {
        if value < Decimal::ZERO {
            return Err(WorkflowDomainError::InvalidInput(format!(
                "{field} must not be negative"
            )));
        }
        if value.normalize().scale() > Self::MAX_SCALE {
            return Err(WorkflowDomainError::InvalidInput(format!(
                "{field} must have at most {} decimal places",
                Self::MAX_SCALE
            )));
        }
        if value > Self::max().0 {
            return Err(WorkflowDomainError::InvalidInput(format!(
                "{field} must not exceed {}",
                Self::max()
            )));
        }

        Ok(Self(value.normalize()))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for BudgetAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
