use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    budgeting::domain::model::value_objects::budget_amount::BudgetAmount,
    iam_integration::domain::model::value_objects::principal_id::PrincipalId,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Expense {
    id: Uuid,
    event_id: Uuid,
    category_id: Uuid,
    item_name: String,
    amount: BudgetAmount,
    added_by: PrincipalId,
    created_at: DateTime<Utc>,
}

impl Expense {
    pub fn new(
        event_id: Uuid,
        category_id: Uuid,
        item_name: String,
        amount: BudgetAmount,
        added_by: PrincipalId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self::restore(
            Uuid::now_v7(),
            event_id,
            category_id,
            item_name,
            amount,
            added_by,
            created_at,
        )
    }

    pub fn restore(
        id: Uuid,
        event_id: Uuid,
        category_id: Uuid,
        item_name: String,
        amount: BudgetAmount,
        added_by: PrincipalId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            event_id,
            category_id,
            item_name,
            amount,
            added_by,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn category_id(&self) -> Uuid {
        self.category_id
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn amount(&self) -> BudgetAmount {
        self.amount
    }

    pub fn added_by(&self) -> PrincipalId {
        self.added_by
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
