use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::{
    approval_workflow::{
        domain::model::{
            entities::approval_record::ApprovalRecord, enums::budget_decision::BudgetDecision,
            value_objects::decision_remarks::DecisionRemarks,
        },
        infrastructure::persistence::repositories::approval_record_repository::{
            ApprovalRecordRepository, DecisionWriteOutcome,
        },
    },
    event_management::domain::model::enums::event_status::EventStatus,
    iam_integration::domain::model::value_objects::principal_id::PrincipalId,
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

pub struct SqlxApprovalRecordRepositoryImpl {
    pool: PgPool,
}

impl SqlxApprovalRecordRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<ApprovalRecord, WorkflowDomainError> {
        let reviewer_id: Uuid = row.try_get("reviewer_id")?;
        let decision_raw: String = row.try_get("decision")?;
        let remarks_raw: String = row.try_get("remarks")?;
        let created_at: DateTime<Utc> = row.try_get("created_at")?;

        let decision = BudgetDecision::from_str(&decision_raw)
            .map_err(|e| WorkflowDomainError::SystemFailure(e.to_string()))?;
        let remarks = DecisionRemarks::new(remarks_raw)
            .map_err(|e| WorkflowDomainError::SystemFailure(e.to_string()))?;

        Ok(ApprovalRecord::restore(
            row.try_get("id")?,
            row.try_get("event_id")?,
            PrincipalId::from_uuid(reviewer_id),
            decision,
            remarks,
            row.try_get("review_cycle")?,
            created_at,
        ))
    }
}

#[async_trait]
impl ApprovalRecordRepository for SqlxApprovalRecordRepositoryImpl {
    async fn record_decision(
        &self,
        record: &ApprovalRecord,
    ) -> Result<DecisionWriteOutcome, WorkflowDomainError> {
        let mut tx = self.pool.begin().await?;

        let transition = r#"
            UPDATE events
            SET status = $1
            WHERE id = $2 AND status = $3 AND review_cycle = $4
        "#;

        let updated = sqlx::query(transition)
            .bind(record.decision().target_status().as_str())
            .bind(record.event_id())
            .bind(EventStatus::Pending.as_str())
            .bind(record.review_cycle())
            .execute(&mut *tx)
            .await?;

        if updated.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(DecisionWriteOutcome::PreconditionFailed);
        }

        let insert = r#"
            INSERT INTO approval_records (id, event_id, reviewer_id, decision, remarks, review_cycle, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#;

        sqlx::query(insert)
            .bind(record.id())
            .bind(record.event_id())
            .bind(record.reviewer_id().value())
            .bind(record.decision().as_str())
            .bind(record.remarks().value())
            .bind(record.review_cycle())
            .bind(record.created_at())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(DecisionWriteOutcome::Applied)
    }

    async fn list_by_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<ApprovalRecord>, WorkflowDomainError> {
        let statement = r#"
            SELECT id, event_id, reviewer_id, decision, remarks, review_cycle, created_at
            FROM approval_records
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
