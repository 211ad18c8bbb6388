use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::{
    budgeting::{
        domain::model::{
            entities::budget_line::BudgetLine, value_objects::budget_amount::BudgetAmount,
        },
        infrastructure::persistence::repositories::budget_line_repository::{
            BudgetLineRepository, BudgetUpsertOutcome,
        },
    },
    event_management::domain::model::enums::event_status::EventStatus,
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

pub struct SqlxBudgetLineRepositoryImpl {
    pool: PgPool,
}

impl SqlxBudgetLineRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<BudgetLine, WorkflowDomainError> {
        let amount: Decimal = row.try_get("amount")?;
        let sponsor_contribution: Decimal = row.try_get("sponsor_contribution")?;
        let updated_at: DateTime<Utc> = row.try_get("updated_at")?;

        Ok(BudgetLine::restore(
            row.try_get("event_id")?,
            row.try_get("category_id")?,
            stored_amount(amount)?,
            stored_amount(sponsor_contribution)?,
            row.try_get("remarks")?,
            updated_at,
        ))
    }
}

fn stored_amount(value: Decimal) -> Result<BudgetAmount, WorkflowDomainError> {
    BudgetAmount::new(value, "stored amount")
        .map_err(|e| WorkflowDomainError::SystemFailure(e.to_string()))
}

#[async_trait]
impl BudgetLineRepository for SqlxBudgetLineRepositoryImpl {
    async fn upsert_lines_while_pending(
        &self,
        event_id: Uuid,
        lines: &[BudgetLine],
    ) -> Result<BudgetUpsertOutcome, WorkflowDomainError> {
        let mut tx = self.pool.begin().await?;

        let status_row = sqlx::query("SELECT status FROM events WHERE id = $1 FOR SHARE")
            .bind(event_id)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(status_row) = status_row else {
            return Ok(BudgetUpsertOutcome::EventMissing);
        };
        let status_raw: String = status_row.try_get("status")?;
        let status = EventStatus::from_str(&status_raw).map_err(|_| {
            WorkflowDomainError::SystemFailure(format!("unknown event status stored: {status_raw}"))
        })?;
        if status != EventStatus::Pending {
            return Ok(BudgetUpsertOutcome::EventNotPending(status));
        }

        let statement = r#"
            INSERT INTO budget_lines (event_id, category_id, amount, sponsor_contribution, remarks, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (event_id, category_id)
            DO UPDATE SET
                amount = EXCLUDED.amount,
                sponsor_contribution = EXCLUDED.sponsor_contribution,
                remarks = EXCLUDED.remarks,
                updated_at = EXCLUDED.updated_at
        "#;

        for line in lines {
            sqlx::query(statement)
                .bind(event_id)
                .bind(line.category_id())
                .bind(line.amount().value())
                .bind(line.sponsor_contribution().value())
                .bind(line.remarks())
                .bind(line.updated_at())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(BudgetUpsertOutcome::Applied)
    }

    async fn list_by_event(&self, event_id: Uuid) -> Result<Vec<BudgetLine>, WorkflowDomainError> {
        let statement = r#"
            SELECT l.event_id, l.category_id, l.amount, l.sponsor_contribution, l.remarks, l.updated_at
            FROM budget_lines l
            JOIN budget_categories c ON c.id = l.category_id
            WHERE l.event_id = $1
            ORDER BY c.display_order, c.name
        "#;

        let rows = sqlx::query(statement)
            .bind(event_id)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }
}
