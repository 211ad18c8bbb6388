use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::budgeting::domain::model::value_objects::{
    budget_amount::BudgetAmount, budget_line_draft::BudgetLineDraft,
};

/// One category's request for one event, keyed by `(event_id, category_id)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BudgetLine {
    event_id: Uuid,
    category_id: Uuid,
    amount: BudgetAmount,
    sponsor_contribution: BudgetAmount,
    remarks: Option<String>,
    updated_at: DateTime<Utc>,
}

impl BudgetLine {
    pub fn from_draft(event_id: Uuid, draft: &BudgetLineDraft, updated_at: DateTime<Utc>) -> Self {
        Self {
            event_id,
            category_id: draft.category_id(),
            amount: draft.amount(),
            sponsor_contribution: draft.sponsor_contribution(),
            remarks: draft.remarks().map(str::to_string),
            updated_at,
        }
    }

    pub fn restore(
        event_id: Uuid,
        category_id: Uuid,
        amount: BudgetAmount,
        sponsor_contribution: BudgetAmount,
        remarks: Option<String>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id,
            category_id,
            amount,
            sponsor_contribution,
            remarks,
            updated_at,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
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

    pub fn net_requested(&self) -> Decimal {
        self.amount.value() - self.sponsor_contribution.value()
    }

    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
