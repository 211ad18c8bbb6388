use std::{fmt, str::FromStr};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PrincipalRole {
    Administrator,
    EventTeamLead,
    WorkshopTeamLead,
    FinanceTeam,
    FacilitiesTeam,
    EventCoordinator,
    WorkshopCoordinator,
}

impl PrincipalRole {
    pub const ALL: [PrincipalRole; 7] = [
        Self::Administrator,
        Self::EventTeamLead,
        Self::WorkshopTeamLead,
        Self::FinanceTeam,
        Self::FacilitiesTeam,
        Self::EventCoordinator,
        Self::WorkshopCoordinator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::EventTeamLead => "event_team_lead",
            Self::WorkshopTeamLead => "workshop_team_lead",
            Self::FinanceTeam => "finance_team",
            Self::FacilitiesTeam => "facilities_team",
            Self::EventCoordinator => "event_coordinator",
            Self::WorkshopCoordinator => "workshop_coordinator",
        }
    }

    pub fn is_team_lead(&self) -> bool {
        matches!(self, Self::EventTeamLead | Self::WorkshopTeamLead)
    }

    pub fn is_coordinator(&self) -> bool {
        matches!(self, Self::EventCoordinator | Self::WorkshopCoordinator)
    }
}

impl fmt::Display for PrincipalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrincipalRole {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| format!("unknown role '{value}'"))
    }
}
