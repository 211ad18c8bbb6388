use std::time::Duration;

use event_budget_workflow::{
    budgeting::domain::{
        model::{
            entities::budget_category::BudgetCategory,
            value_objects::budget_line_draft::BudgetLineDraft,
        },
        services::budget_category_catalog::BudgetCategoryCatalog,
    },
    event_management::domain::model::commands::create_event_command::CreateEventCommand,
    iam_integration::domain::model::{
        entities::principal::Principal, enums::principal_role::PrincipalRole,
        value_objects::principal_id::PrincipalId,
    },
    shared::application::retry_policy::RetryPolicy,
    venue_gate::domain::model::entities::venue::Venue,
};
use rust_decimal::Decimal;
use uuid::Uuid;

pub const ADMIN_ID: &str = "0190a001-0000-7000-8000-000000000001";
pub const EVENT_LEAD_ID: &str = "0190a001-0000-7000-8000-000000000002";
pub const WORKSHOP_LEAD_ID: &str = "0190a001-0000-7000-8000-000000000003";
pub const FINANCE_ID: &str = "0190a001-0000-7000-8000-000000000004";
pub const SECOND_FINANCE_ID: &str = "0190a001-0000-7000-8000-000000000005";
pub const RETIRED_FINANCE_ID: &str = "0190a001-0000-7000-8000-000000000006";
pub const FACILITIES_ID: &str = "0190a001-0000-7000-8000-000000000007";
pub const COORDINATOR_ID: &str = "0190a001-0000-7000-8000-000000000008";
pub const OTHER_COORDINATOR_ID: &str = "0190a001-0000-7000-8000-000000000009";

pub const PRIZE_MONEY_ID: &str = "0190a000-0000-7000-8000-000000000001";
pub const FACILITIES_CATEGORY_ID: &str = "0190a000-0000-7000-8000-000000000002";
pub const EQUIPMENT_ID: &str = "0190a000-0000-7000-8000-000000000003";
pub const REFRESHMENTS_ID: &str = "0190a000-0000-7000-8000-000000000004";
pub const MARKETING_ID: &str = "0190a000-0000-7000-8000-000000000005";
pub const MISCELLANEOUS_ID: &str = "0190a000-0000-7000-8000-000000000006";

pub const AUDITORIUM_ID: &str = "0190a002-0000-7000-8000-000000000001";
pub const SEMINAR_ROOM_ID: &str = "0190a002-0000-7000-8000-000000000002";
pub const CLOSED_HALL_ID: &str = "0190a002-0000-7000-8000-000000000003";

pub fn uuid(raw: &str) -> Uuid {
    Uuid::parse_str(raw).expect("valid fixture uuid")
}

pub fn principal(raw_id: &str, role: PrincipalRole) -> Principal {
    Principal::new(
        PrincipalId::new(raw_id).expect("valid principal id"),
        role,
    )
}

pub fn admin() -> Principal {
    principal(ADMIN_ID, PrincipalRole::Administrator)
}

pub fn event_lead() -> Principal {
    principal(EVENT_LEAD_ID, PrincipalRole::EventTeamLead)
}

pub fn workshop_lead() -> Principal {
    principal(WORKSHOP_LEAD_ID, PrincipalRole::WorkshopTeamLead)
}

pub fn finance() -> Principal {
    principal(FINANCE_ID, PrincipalRole::FinanceTeam)
}

pub fn second_finance() -> Principal {
    principal(SECOND_FINANCE_ID, PrincipalRole::FinanceTeam)
}

pub fn retired_finance() -> Principal {
    principal(RETIRED_FINANCE_ID, PrincipalRole::FinanceTeam)
}

pub fn facilities() -> Principal {
    principal(FACILITIES_ID, PrincipalRole::FacilitiesTeam)
}

pub fn coordinator() -> Principal {
    principal(COORDINATOR_ID, PrincipalRole::EventCoordinator)
}

pub fn other_coordinator() -> Principal {
    principal(OTHER_COORDINATOR_ID, PrincipalRole::WorkshopCoordinator)
}

pub fn fast_retry_policy() -> RetryPolicy {
    RetryPolicy::new(
        3,
        Duration::from_millis(1),
        Duration::from_millis(4),
        Duration::from_millis(200),
    )
}

pub fn category_catalog() -> BudgetCategoryCatalog {
    // Listed out of order on purpose; the catalog sorts by display order.
    BudgetCategoryCatalog::new(vec![
        category(MISCELLANEOUS_ID, "Miscellaneous", 6),
        category(PRIZE_MONEY_ID, "Prize Money", 1),
        category(REFRESHMENTS_ID, "Refreshments", 4),
        category(FACILITIES_CATEGORY_ID, "Facilities", 2),
        category(MARKETING_ID, "Marketing", 5),
        category(EQUIPMENT_ID, "Equipment", 3),
    ])
}

fn category(raw_id: &str, name: &str, display_order: i32) -> BudgetCategory {
    BudgetCategory::new(uuid(raw_id), name.to_string(), None, display_order)
}

pub fn venues() -> Vec<Venue> {
    vec![
        Venue::new(uuid(AUDITORIUM_ID), "Main Auditorium".to_string(), Some(500), true),
        Venue::new(uuid(SEMINAR_ROOM_ID), "Seminar Room".to_string(), Some(40), true),
        Venue::new(uuid(CLOSED_HALL_ID), "Old Hall".to_string(), None, false),
    ]
}

pub fn create_event_command(creator: Principal, coordinator_id: Option<&str>) -> CreateEventCommand {
    CreateEventCommand::new(
        creator,
        "Robotics Hackathon".to_string(),
        "technical",
        Some("Two day build sprint".to_string()),
        Some(120),
        Some("2026-11-20T09:00:00Z"),
        coordinator_id,
    )
    .expect("valid create event command")
}

pub fn line(raw_category_id: &str, amount: Decimal, sponsor: Option<Decimal>) -> BudgetLineDraft {
    BudgetLineDraft::new(uuid(raw_category_id), amount, sponsor, None)
        .expect("valid budget line draft")
}
