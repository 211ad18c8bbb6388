use crate::shared::domain::model::enums::workflow_domain_error::WorkflowDomainError;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecisionRemarks(String);

impl DecisionRemarks {
    pub const MAX_LENGTH: usize = 2000;

    pub fn new(value: String) -> Result<Self, WorkflowDomainError> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(WorkflowDomainError::InvalidInput(
                "remarks are required for a budget decision".to_string(),
            ));
        }
        if trimmed.chars().count() > Self::MAX_LENGTH {
            return Err(WorkflowDomainError::InvalidInput(format!(
                "remarks must be at most {} characters",
                Self::MAX_LENGTH
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
