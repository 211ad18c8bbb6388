use std::str::FromStr;

use uuid::Uuid;

use crate::{
    approval_workflow::domain::model::{
        enums::budget_decision::BudgetDecision, value_objects::decision_remarks::DecisionRemarks,
    },
    iam_integration::domain::model::entities::principal::Principal,
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

#[derive(Clone, Debug)]
pub struct DecideBudgetCommand {
    principal: Principal,
    event_id: Uuid,
    decision: BudgetDecision,
    remarks: DecisionRemarks,
}

impl DecideBudgetCommand {
    pub fn new(
        principal: Principal,
        event_id: Uuid,
        decision: &str,
        remarks: String,
    ) -> Result<Self, WorkflowDomainError> {
        Ok(Self {
            principal,
            event_id,
            decision: BudgetDecision::from_str(decision)?,
            remarks: DecisionRemarks::new(remarks)?,
        })
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn decision(&self) -> BudgetDecision {
        self.decision
    }

    pub fn remarks(&self) -> &DecisionRemarks {
        &self.remarks
    }
}
