use uuid::Uuid;

use crate::{
    iam_integration::domain::model::entities::principal::Principal,
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

#[derive(Clone, Debug)]
pub struct ResubmitBudgetCommand {
    principal: Principal,
    event_id: Uuid,
    note: Option<String>,
}

impl ResubmitBudgetCommand {
    pub const MAX_NOTE_LENGTH: usize = 1000;

    pub fn new(
        principal: Principal,
        event_id: Uuid,
        note: Option<String>,
    ) -> Result<Self, WorkflowDomainError> {
        let note = note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());

        if note
            .as_ref()
            .is_some_and(|n| n.chars().count() > Self::MAX_NOTE_LENGTH)
        {
            return Err(WorkflowDomainError::InvalidInput(format!(
                "resubmission note must be at most {} characters",
                Self::MAX_NOTE_LENGTH
            )));
        }

        Ok(Self {
            principal,
            event_id,
            note,
        })
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }
}
