use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    budgeting::domain::model::value_objects::budget_amount::BudgetAmount,
    iam_integration::domain::model::entities::principal::Principal,
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

#[derive(Clone, Debug)]
pub struct RecordExpenseCommand {
    principal: Principal,
    event_id: Uuid,
    category_id: Uuid,
    item_name: String,
    amount: BudgetAmount,
}

impl RecordExpenseCommand {
    pub const MAX_ITEM_NAME_LENGTH: usize = 200;

    pub fn new(
        principal: Principal,
        event_id: Uuid,
        category_id: Uuid,
        item_name: String,
        amount: Decimal,
    ) -> Result<Self, WorkflowDomainError> {
        let item_name = item_name.trim().to_string();
        if item_name.is_empty() {
            return Err(WorkflowDomainError::InvalidInput(
                "item name must not be blank".to_string(),
            ));
        }
        if item_name.chars().count() > Self::MAX_ITEM_NAME_LENGTH {
            return Err(WorkflowDomainError::InvalidInput(format!(
                "item name must be at most {} characters",
                Self::MAX_ITEM_NAME_LENGTH
            )));
        }

        Ok(Self {
            principal,
            event_id,
            category_id,
            item_name,
            amount: BudgetAmount::new(amount, "amount")?,
        })
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
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
}
