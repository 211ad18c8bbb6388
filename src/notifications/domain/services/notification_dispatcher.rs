use std::iter;

use crate::{
    iam_integration::domain::model::value_objects::principal_id::PrincipalId,
    notifications::domain::model::{
        events::workflow_outcome::WorkflowOutcome,
        value_objects::notification_intent::NotificationIntent,
    },
};

/// Maps a workflow outcome to the intents that should be delivered.
///
/// Pure: recipients come from the outcome itself, or from
/// `finance_recipients` for submission outcomes. A principal appears at most
/// once per outcome.
pub struct NotificationDispatcher;

impl NotificationDispatcher {
    pub fn dispatch(
        outcome: &WorkflowOutcome,
        finance_recipients: &[PrincipalId],
    ) -> Vec<NotificationIntent> {
        let subject = outcome.subject();

        let candidates: Vec<PrincipalId> = match outcome {
            WorkflowOutcome::EventCreated { .. } => subject.coordinator_id.into_iter().collect(),
            WorkflowOutcome::BudgetSubmitted { .. } | WorkflowOutcome::BudgetResubmitted { .. } => {
                finance_recipients.to_vec()
            }
            WorkflowOutcome::BudgetDecided { .. } | WorkflowOutcome::VenueAssigned { .. } => {
                iter::once(subject.creator_id)
                    .chain(subject.coordinator_id)
                    .collect()
            }
            WorkflowOutcome::ExpenseRecorded { .. } => {
                vec![subject.coordinator_id.unwrap_or(subject.creator_id)]
            }
        };

        let mut recipients: Vec<PrincipalId> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if !recipients.contains(&candidate) {
                recipients.push(candidate);
            }
        }

        let template_key = outcome.template_key();
        let payload = outcome.payload();

        recipients
            .into_iter()
            .map(|recipient| NotificationIntent::new(recipient, template_key, payload.clone()))
            .collect()
    }
}
