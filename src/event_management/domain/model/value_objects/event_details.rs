use chrono::{DateTime, Utc};

use crate::{
    event_management::domain::model::{
        enums::event_type::EventType, value_objects::event_name::EventName,
    },
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EventDetails {
    name: EventName,
    event_type: EventType,
    description: Option<String>,
    expected_participants: Option<i32>,
    scheduled_at: Option<DateTime<Utc>>,
}

impl EventDetails {
    pub fn new(
        name: EventName,
        event_type: EventType,
        description: Option<String>,
        expected_participants: Option<i32>,
        scheduled_at: Option<DateTime<Utc>>,
    ) -> Result<Self, WorkflowDomainError> {
        if let Some(participants) = expected_participants {
            if participants <= 0 {
                return Err(WorkflowDomainError::InvalidInput(
                    "expected participants must be positive".to_string(),
                ));
            }
        }

        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Self {
            name,
            event_type,
            description,
            expected_participants,
            scheduled_at,
        })
    }

    pub fn name(&self) -> &EventName {
        &self.name
    }

    pub fn event_type(&self) -> EventType {
        self.event_type
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn expected_participants(&self) -> Option<i32> {
        self.expected_participants
    }

    pub fn scheduled_at(&self) -> Option<DateTime<Utc>> {
        self.scheduled_at
    }
}
