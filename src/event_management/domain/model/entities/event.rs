use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    access_control::domain::model::value_objects::resource_ownership::ResourceOwnership,
    event_management::domain::model::{
        enums::event_status::EventStatus, value_objects::event_details::EventDetails,
    },
    iam_integration::domain::model::value_objects::principal_id::PrincipalId,
    notifications::domain::model::value_objects::outcome_subject::OutcomeSubject,
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Event {
    id: Uuid,
    details: EventDetails,
    creator_id: PrincipalId,
    coordinator_id: Option<PrincipalId>,
    venue_id: Option<Uuid>,
    status: EventStatus,
    review_cycle: i32,
    created_at: DateTime<Utc>,
}

impl Event {
    pub fn new_pending(
        details: EventDetails,
        creator_id: PrincipalId,
        coordinator_id: Option<PrincipalId>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::now_v7(),
            details,
            creator_id,
            coordinator_id,
            venue_id: None,
            status: EventStatus::Pending,
            review_cycle: 1,
            created_at,
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: Uuid,
        details: EventDetails,
        creator_id: PrincipalId,
        coordinator_id: Option<PrincipalId>,
        venue_id: Option<Uuid>,
        status: EventStatus,
        review_cycle: i32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            details,
            creator_id,
            coordinator_id,
            venue_id,
            status,
            review_cycle,
            created_at,
        }
    }

    /// Details stay editable until finance has looked at the budget.
    pub fn revise(
        &self,
        details: EventDetails,
        coordinator_id: Option<PrincipalId>,
    ) -> Result<Self, WorkflowDomainError> {
        if self.status != EventStatus::Pending {
            return Err(WorkflowDomainError::InvalidState(format!(
                "only PENDING events can be edited, current status is {}",
                self.status
            )));
        }

        Ok(Self {
            details,
            coordinator_id,
            ..self.clone()
        })
    }

    pub fn ownership(&self) -> ResourceOwnership {
        ResourceOwnership::new(self.id, self.creator_id, self.coordinator_id)
    }

    pub fn outcome_subject(&self) -> OutcomeSubject {
        OutcomeSubject {
            event_id: self.id,
            event_name: self.details.name().value().to_string(),
            creator_id: self.creator_id,
            coordinator_id: self.coordinator_id,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn details(&self) -> &EventDetails {
        &self.details
    }

    pub fn creator_id(&self) -> PrincipalId {
        self.creator_id
    }

    pub fn coordinator_id(&self) -> Option<PrincipalId> {
        self.coordinator_id
    }

    pub fn venue_id(&self) -> Option<Uuid> {
        self.venue_id
    }

    pub fn status(&self) -> EventStatus {
        self.status
    }

    pub fn review_cycle(&self) -> i32 {
        self.review_cycle
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
