use chrono::{DateTime, Utc};
use std::str::FromStr;
use uuid::Uuid;

use crate::{
    event_management::domain::model::{
        enums::event_type::EventType,
        value_objects::{event_details::EventDetails, event_name::EventName},
    },
    iam_integration::domain::model::{
        entities::principal::Principal, value_objects::principal_id::PrincipalId,
    },
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

/// Partial edit of a PENDING event. Absent fields keep their stored value.
#[derive(Clone, Debug)]
pub struct UpdateEventCommand {
    principal: Principal,
    event_id: Uuid,
    name: Option<EventName>,
    event_type: Option<EventType>,
    description: Option<String>,
    expected_participants: Option<i32>,
    scheduled_at: Option<DateTime<Utc>>,
    coordinator_id: Option<PrincipalId>,
}

impl UpdateEventCommand {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        principal: Principal,
        event_id: Uuid,
        name: Option<String>,
        event_type: Option<&str>,
        description: Option<String>,
        expected_participants: Option<i32>,
        scheduled_at: Option<&str>,
        coordinator_id: Option<&str>,
    ) -> Result<Self, WorkflowDomainError> {
        let scheduled_at = scheduled_at
            .map(|raw| {
                DateTime::parse_from_rfc3339(raw.trim())
                    .map(|parsed| parsed.with_timezone(&Utc))
                    .map_err(|_| {
                        WorkflowDomainError::InvalidInput(
                            "scheduled_at must be an RFC 3339 timestamp".to_string(),
                        )
                    })
            })
            .transpose()?;

        let coordinator_id = coordinator_id
            .map(PrincipalId::new)
            .transpose()
            .map_err(WorkflowDomainError::InvalidInput)?;

        let command = Self {
            principal,
            event_id,
            name: name.map(EventName::new).transpose()?,
            event_type: event_type.map(EventType::from_str).transpose()?,
            description,
            expected_participants,
            scheduled_at,
            coordinator_id,
        };

        if command.is_empty() {
            return Err(WorkflowDomainError::InvalidInput(
                "update must change at least one field".to_string(),
            ));
        }

        Ok(command)
    }

    fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.event_type.is_none()
            && self.description.is_none()
            && self.expected_participants.is_none()
            && self.scheduled_at.is_none()
            && self.coordinator_id.is_none()
    }

    /// Overlays the supplied fields on `current`.
    pub fn merge_into(&self, current: &EventDetails) -> Result<EventDetails, WorkflowDomainError> {
        EventDetails::new(
            self.name.clone().unwrap_or_else(|| current.name().clone()),
            self.event_type.unwrap_or(current.event_type()),
            self.description
                .clone()
                .or_else(|| current.description().map(str::to_string)),
            self.expected_participants.or(current.expected_participants()),
            self.scheduled_at.or(current.scheduled_at()),
        )
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn coordinator_id(&self) -> Option<PrincipalId> {
        self.coordinator_id
    }
}
