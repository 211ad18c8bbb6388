use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    budgeting::domain::model::value_objects::budget_amount::BudgetAmount,
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BudgetLineDraft {
    category_id: Uuid,
    amount: BudgetAmount,
    sponsor_contribution: BudgetAmount,
    remarks: Option<String>,
}

impl BudgetLineDraft {
    pub fn new(
        category_id: Uuid,
        amount: Decimal,
        sponsor_contribution: Option<Decimal>,
        remarks: Option<String>,
    ) -> Result<Self, WorkflowDomainError> {
        Ok(Self {
            category_id,
            amount: BudgetAmount::new(amount, "amount")?,
            sponsor_contribution: sponsor_contribution
                .map(|value| BudgetAmount::new(value, "sponsor_contribution"))
                .transpose()?
                .unwrap_or(BudgetAmount::ZERO),
            remarks: remarks
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
        })
    }

    pub fn category_id(&self) -> Uuid {
        self.category_id
    }

    pub fn amount(&self) -> BudgetAmount {
        self.amount
    }

    pub fn sponsor_contribution(&self) -> BudgetAmount {
        self.sponsor_contribution
    }

    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }
}
