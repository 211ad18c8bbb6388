use rust_decimal::Decimal;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::{
    iam_integration::domain::model::value_objects::principal_id::PrincipalId,
    notifications::domain::model::{
        enums::notification_template_key::NotificationTemplateKey,
        value_objects::outcome_subject::OutcomeSubject,
    },
};

#[derive(Clone, Debug, PartialEq)]
pub enum WorkflowOutcome {
    EventCreated {
        subject: OutcomeSubject,
    },
    BudgetSubmitted {
        subject: OutcomeSubject,
        requested_total: Decimal,
        line_count: usize,
    },
    BudgetResubmitted {
        subject: OutcomeSubject,
        review_cycle: i32,
        note: Option<String>,
    },
    BudgetDecided {
        subject: OutcomeSubject,
        decision: String,
        remarks: String,
        reviewer_id: PrincipalId,
        review_cycle: i32,
    },
    VenueAssigned {
        subject: OutcomeSubject,
        venue_id: Uuid,
        venue_name: String,
    },
    ExpenseRecorded {
        subject: OutcomeSubject,
        expense_id: Uuid,
        item_name: String,
        amount: Decimal,
    },
}

impl WorkflowOutcome {
    pub fn subject(&self) -> &OutcomeSubject {
        match self {
            Self::EventCreated { subject }
            | Self::BudgetSubmitted { subject, .. }
            | Self::BudgetResubmitted { subject, .. }
            | Self::BudgetDecided { subject, .. }
            | Self::VenueAssigned { subject, .. }
            | Self::ExpenseRecorded { subject, .. } => subject,
        }
    }

    pub fn template_key(&self) -> NotificationTemplateKey {
        match self {
            Self::EventCreated { .. } => NotificationTemplateKey::EventCreated,
            Self::BudgetSubmitted { .. } => NotificationTemplateKey::BudgetSubmitted,
            Self::BudgetResubmitted { .. } => NotificationTemplateKey::BudgetResubmitted,
            Self::BudgetDecided { .. } => NotificationTemplateKey::BudgetDecided,
            Self::VenueAssigned { .. } => NotificationTemplateKey::VenueAssigned,
            Self::ExpenseRecorded { .. } => NotificationTemplateKey::ExpenseRecorded,
        }
    }

    pub fn notifies_finance(&self) -> bool {
        matches!(
            self,
            Self::BudgetSubmitted { .. } | Self::BudgetResubmitted { .. }
        )
    }

    pub fn payload(&self) -> Value {
        let subject = self.subject();
        let mut payload = json!({
            "event_id": subject.event_id.to_string(),
            "event_name": subject.event_name,
        });

        let facts = match self {
            Self::EventCreated { .. } => json!({
                "creator_id": subject.creator_id.as_string(),
            }),
            Self::BudgetSubmitted {
                requested_total,
                line_count,
                ..
            } => json!({
                "requested_total": requested_total.to_string(),
                "line_count": line_count,
            }),
            Self::BudgetResubmitted {
                review_cycle, note, ..
            } => json!({
                "review_cycle": review_cycle,
                "note": note,
            }),
            Self::BudgetDecided {
                decision,
                remarks,
                reviewer_id,
                review_cycle,
                ..
            } => json!({
                "decision": decision,
                "remarks": remarks,
                "reviewer_id": reviewer_id.as_string(),
                "review_cycle": review_cycle,
            }),
            Self::VenueAssigned {
                venue_id,
                venue_name,
                ..
            } => json!({
                "venue_id": venue_id.to_string(),
                "venue_name": venue_name,
            }),
            Self::ExpenseRecorded {
                expense_id,
                item_name,
                amount,
                ..
            } => json!({
                "expense_id": expense_id.to_string(),
                "item_name": item_name,
                "amount": amount.to_string(),
            }),
        };

        if let (Some(target), Value::Object(extra)) = (payload.as_object_mut(), facts) {
            target.extend(extra);
        }

        payload
    }
}
