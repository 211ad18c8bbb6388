use chrono::{DateTime, Utc};
use std::str::FromStr;

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

#[derive(Clone, Debug)]
pub struct CreateEventCommand {
    principal: Principal,
    details: EventDetails,
    coordinator_id: Option<PrincipalId>,
}

impl CreateEventCommand {
    pub fn new(
        principal: Principal,
        name: String,
        event_type: &str,
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

        Ok(Self {
            principal,
            details: EventDetails::new(
                EventName::new(name)?,
                EventType::from_str(event_type)?,
                description,
                expected_participants,
                scheduled_at,
            )?,
            coordinator_id,
        })
    }

    pub fn principal(&self) -> &Principal {
        &self.principal
    }

    pub fn details(&self) -> &EventDetails {
        &self.details
    }

    pub fn coordinator_id(&self) -> Option<PrincipalId> {
        self.coordinator_id
    }
}
