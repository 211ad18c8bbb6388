use std::str::FromStr;

use crate::shared::domain::model::enums::workflow_domain_error::WorkflowDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum EventType {
    Cultural,
    Technical,
    Workshop,
    Competition,
    Seminar,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cultural => "CULTURAL",
            Self::Technical => "TECHNICAL",
            Self::Workshop => "WORKSHOP",
            Self::Competition => "COMPETITION",
            Self::Seminar => "SEMINAR",
        }
    }
}

impl FromStr for EventType {
    type Err = WorkflowDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "CULTURAL" => Ok(Self::Cultural),
            "TECHNICAL" => Ok(Self::Technical),
            "WORKSHOP" => Ok(Self::Workshop),
            "COMPETITION" => Ok(Self::Competition),
            "SEMINAR" => Ok(Self::Seminar),
            other => Err(WorkflowDomainError::InvalidInput(format!(
                "unknown event type '{other}'"
            ))),
        }
    }
}
