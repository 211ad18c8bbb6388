use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum NotificationTemplateKey {
    EventCreated,
    BudgetSubmitted,
    BudgetResubmitted,
    BudgetDecided,
    VenueAssigned,
    ExpenseRecorded,
}

impl NotificationTemplateKey {
    pub const ALL: [NotificationTemplateKey; 6] = [
        Self::EventCreated,
        Self::BudgetSubmitted,
        Self::BudgetResubmitted,
        Self::BudgetDecided,
        Self::VenueAssigned,
        Self::ExpenseRecorded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EventCreated => "event_created",
            Self::BudgetSubmitted => "budget_submitted",
            Self::BudgetResubmitted => "budget_resubmitted",
            Self::BudgetDecided => "budget_decided",
            Self::VenueAssigned => "venue_assigned",
            Self::ExpenseRecorded => "expense_recorded",
        }
    }
}

impl fmt::Display for NotificationTemplateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationTemplateKey {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .ok_or(())
    }
}
