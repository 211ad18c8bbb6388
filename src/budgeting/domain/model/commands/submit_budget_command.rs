use uuid::Uuid;

use crate::{
    budgeting::domain::model::value_objects::budget_line_draft::BudgetLineDraft,
    iam_integration::domain::model::entities::principal::Principal,
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

#[derive(Clone, Debug)]
pub struct SubmitBudgetCommand {
    principal: Principal,
    event_id: Uuid,
    lines: Vec<BudgetLineDraft>,
}

impl SubmitBudgetCommand {
    /// Repeated categories collapse into one line: the last value wins and
    /// the line keeps the position of the category's first appearance.
    pub fn new(
        principal: Principal,
        event_id: Uuid,
        drafts: Vec<BudgetLineDraft>,
    ) -> Result<Self, WorkflowDomainError> {
        if drafts.is_empty() {
            return Err(WorkflowDomainError::InvalidInput(
                "a budget submission needs at least one line".to_string(),
            ));
        }

        let mut lines: Vec<BudgetLineDraft> = Vec::with_capacity(drafts.len());
        for draft in drafts {
            match lines
                .iter_mut()
                .find(|existing| existing.category_id() == draft.category_id())
            {
                Some(existing) => *existing = draft,
                None => lines.push(draft),
            }
        }

        Ok(Self {
            principal,
            event_id,
            lines,
        })
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn lines(&self) -> &[BudgetLineDraft] {
        &self.lines
    }
}
