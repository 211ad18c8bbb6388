use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    approval_workflow::domain::model::{
        enums::budget_decision::BudgetDecision, value_objects::decision_remarks::DecisionRemarks,
    },
    iam_integration::domain::model::value_objects::principal_id::PrincipalId,
};

/// Immutable record of one reviewer decision within a review cycle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ApprovalRecord {
    id: Uuid,
    event_id: Uuid,
    reviewer_id: PrincipalId,
    decision: BudgetDecision,
    remarks: DecisionRemarks,
    review_cycle: i32,
    created_at: DateTime<Utc>,
}

impl ApprovalRecord {
    pub fn new(
        event_id: Uuid,
        reviewer_id: PrincipalId,
        decision: BudgetDecision,
        remarks: DecisionRemarks,
        review_cycle: i32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            event_id,
            reviewer_id,
            decision,
            remarks,
            review_cycle,
            created_at,
        }
    }

    pub fn restore(
        id: Uuid,
        event_id: Uuid,
        reviewer_id: PrincipalId,
        decision: BudgetDecision,
        remarks: DecisionRemarks,
        review_cycle: i32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            event_id,
            reviewer_id,
            decision,
            remarks,
            review_cycle,
            created_at,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn reviewer_id(&self) -> PrincipalId {
        self.reviewer_id
    }

    pub fn decision(&self) -> BudgetDecision {
        self.decision
    }

    pub fn remarks(&self) -> &DecisionRemarks {
        &self.remarks
    }

    pub fn review_cycle(&self) -> i32 {
        self.review_cycle
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
