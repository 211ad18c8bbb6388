use std::{fmt, str::FromStr};

use super::access_control_domain_error::AccessControlDomainError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CapabilityAction {
    CreateEvent,
    UpdateEvent,
    SubmitBudget,
    ReviewBudget,
    AssignVenue,
    RecordExpense,
    ViewEvent,
    AdminOverride,
}

impl CapabilityAction {
    pub const ALL: [CapabilityAction; 8] = [
        Self::CreateEvent,
        Self::UpdateEvent,
        Self::SubmitBudget,
        Self::ReviewBudget,
        Self::AssignVenue,
        Self::RecordExpense,
        Self::ViewEvent,
        Self::AdminOverride,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateEvent => "create_event",
            Self::UpdateEvent => "update_event",
            Self::SubmitBudget => "submit_budget",
            Self::ReviewBudget => "review_budget",
            Self::AssignVenue => "assign_venue",
            Self::RecordExpense => "record_expense",
            Self::ViewEvent => "view_event",
            Self::AdminOverride => "admin_override",
        }
    }
}

impl fmt::Display for CapabilityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CapabilityAction {
    type Err = AccessControlDomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == value)
            .ok_or(AccessControlDomainError::InvalidActionName)
    }
}
