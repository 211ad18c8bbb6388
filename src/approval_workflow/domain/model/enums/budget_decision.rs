use std::{fmt, str::FromStr};

use crate::{
    event_management::domain::model::enums::event_status::EventStatus,
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum BudgetDecision {
    Approved,
    Rejected,
}

impl BudgetDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }

    pub fn target_status(&self) -> EventStatus {
        match self {
            Self::Approved => EventStatus::Approved,
            Self::Rejected => EventStatus::Rejected,
        }
    }
}

impl fmt::Display for BudgetDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetDecision {
    type Err = WorkflowDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(WorkflowDomainError::InvalidInput(format!(
                "decision must be APPROVED or REJECTED, got '{value}'"
            ))),
        }
    }
}
