use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::{
    budgeting::domain::model::value_objects::budget_amount::BudgetAmount,
    event_management::domain::model::enums::event_status::EventStatus,
    iam_integration::domain::model::value_objects::principal_id::PrincipalId,
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
    venue_gate::{
        domain::model::entities::expense::Expense,
        infrastructure::persistence::repositories::expense_repository::{
            ExpenseRepository, ExpenseWriteOutcome,
        },
    },
};

pub struct SqlxExpenseRepositoryImpl {
    pool: PgPool,
}

impl SqlxExpenseRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<Expense, WorkflowDomainError> {
        let amount: Decimal = row.try_get("amount")?;
        let added_by: Uuid = row.try_get("added_by")?;
        let created_at: DateTime<Utc> = row.try_get("created_at")?;

        Ok(Expense::restore(
            row.try_get("id")?,
            row.try_get("event_id")?,
            row.try_get("category_id")?,
            row.try_get("item_name")?,
            BudgetAmount::new(amount, "stored amount")
                .map_err(|e| WorkflowDomainError::SystemFailure(e.to_string()))?,
            PrincipalId::from_uuid(added_by),
            created_at,
        ))
    }
}

#[async_trait]
impl ExpenseRepository for SqlxExpenseRepositoryImpl {
    async fn insert_while_approved(
        &self,
        expense: &Expense,
    ) -> Result<ExpenseWriteOutcome, WorkflowDomainError> {
        let statement = r#"
            INSERT INTO expenses (id, event_id, category_id, item_name, amount, added_by, created_at)
            SELECT $1, e.id, $3, $4, $5, $6, $7
            FROM events e
            WHERE e.id = $2 AND e.status = $8
        "#;

        let inserted = sqlx::query(statement)
            .bind(expense.id())
            .bind(expense.event_id())
            .bind(expense.category_id())
            .bind(expense.item_name())
            .bind(expense.amount().value())
            .bind(expense.added_by().value())
            .bind(expense.created_at())
            .bind(EventStatus::Approved.as_str())
            .execute(&self.pool)
            .await?;

        if inserted.rows_affected() == 0 {
            Ok(ExpenseWriteOutcome::EventNotApproved)
        } else {
            Ok(ExpenseWriteOutcome::Applied)
        }
    }

    async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<Expense>, WorkflowDomainError> {
        let statement = r#"
            SELECT id, event_id, category_id, item_name, amount, added_by, created_at
            FROM expenses
            WHERE event_id = $1
            ORDER BY created_at, id
        "#;

        let rows = sqlx::query(statement)
            .bind(event_id)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }
}
