use event_budget_workflow::{
    event_management::domain::{
        model::{
            commands::{
                complete_event_command::CompleteEventCommand,
                create_event_command::CreateEventCommand,
                update_event_command::UpdateEventCommand,
            },
            enums::{event_status::EventStatus, event_type::EventType},
            queries::{get_event_query::GetEventQuery, list_events_query::ListEventsQuery},
        },
        services::{
            event_command_service::EventCommandService, event_query_service::EventQueryService,
        },
    },
    notifications::domain::model::events::workflow_outcome::WorkflowOutcome,
    iam_integration::domain::model::entities::principal::Principal,
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};
use uuid::Uuid;

use crate::support::{
    create_workflow_harness,
    fixtures::{
        COORDINATOR_ID, FINANCE_ID, OTHER_COORDINATOR_ID, admin, coordinator,
        create_event_command, event_lead, facilities, finance, other_coordinator, workshop_lead,
    },
};

#[tokio::test]
async fn created_event_starts_pending_in_the_first_review_cycle() {
    let harness = create_workflow_harness();

    let event = harness
        .event_commands
        .handle_create(create_event_command(event_lead(), Some(COORDINATOR_ID)))
        .await
        .expect("event created");

    assert_eq!(event.status(), EventStatus::Pending);
    assert_eq!(event.review_cycle(), 1);
    assert_eq!(event.creator_id(), event_lead().id());
    assert_eq!(event.coordinator_id(), Some(coordinator().id()));
    assert_eq!(event.venue_id(), None);
    assert_eq!(harness.store.event(event.id()), Some(event.clone()));

    let published = harness.notifications.published();
    assert!(matches!(
        published.as_slice(),
        [WorkflowOutcome::EventCreated { subject }] if subject.event_id == event.id()
    ));
}

#[tokio::test]
async fn coordinator_must_hold_a_coordinator_role() {
    let harness = create_workflow_harness();

    let error = harness
        .event_commands
        .handle_create(create_event_command(event_lead(), Some(FINANCE_ID)))
        .await
        .expect_err("finance cannot coordinate");

    assert!(matches!(error, WorkflowDomainError::InvalidInput(_)));
    assert_eq!(harness.store.event_count(), 0);
    assert!(harness.notifications.published().is_empty());
}

#[tokio::test]
async fn unknown_coordinator_is_rejected() {
    let harness = create_workflow_harness();

    let error = harness
        .event_commands
        .handle_create(create_event_command(
            event_lead(),
            Some("0190a0ff-0000-7000-8000-000000000000"),
        ))
        .await
        .expect_err("coordinator not in directory");

    assert!(matches!(error, WorkflowDomainError::InvalidInput(_)));
}

#[tokio::test]
async fn finance_cannot_create_events() {
    let harness = create_workflow_harness();

    let error = harness
        .event_commands
        .handle_create(create_event_command(finance(), None))
        .await
        .expect_err("finance may not create");

    assert!(matches!(error, WorkflowDomainError::Unauthorized(_)));
    assert_eq!(harness.store.event_count(), 0);
}

#[test]
fn create_command_validates_its_fields() {
    let blank_name = CreateEventCommand::new(
        event_lead(),
        "   ".to_string(),
        "technical",
        None,
        None,
        None,
        None,
    );
    let unknown_type = CreateEventCommand::new(
        event_lead(),
        "Quiz Night".to_string(),
        "party",
        None,
        None,
        None,
        None,
    );
    let bad_participants = CreateEventCommand::new(
        event_lead(),
        "Quiz Night".to_string(),
        "cultural",
        None,
        Some(0),
        None,
        None,
    );
    let bad_date = CreateEventCommand::new(
        event_lead(),
        "Quiz Night".to_string(),
        "cultural",
        None,
        None,
        Some("next friday"),
        None,
    );

    for result in [blank_name, unknown_type, bad_participants, bad_date] {
        assert!(matches!(result, Err(WorkflowDomainError::InvalidInput(_))));
    }
}

#[tokio::test]
async fn listing_is_scoped_by_role() {
    let harness = create_workflow_harness();
    let lead_event = harness.pending_event().await;
    let workshop_event = harness
        .event_commands
        .handle_create(create_event_command(workshop_lead(), Some(OTHER_COORDINATOR_ID)))
        .await
        .expect("event created");

    let lead_view = harness
        .event_queries
        .handle_list(ListEventsQuery::new(event_lead(), None))
        .await
        .expect("list");
    let coordinator_view = harness
        .event_queries
        .handle_list(ListEventsQuery::new(other_coordinator(), None))
        .await
        .expect("list");
    let finance_view = harness
        .event_queries
        .handle_list(ListEventsQuery::new(finance(), None))
        .await
        .expect("list");

    assert_eq!(
        lead_view.iter().map(|e| e.id()).collect::<Vec<_>>(),
        vec![lead_event.id()]
    );
    assert_eq!(
        coordinator_view.iter().map(|e| e.id()).collect::<Vec<_>>(),
        vec![workshop_event.id()]
    );
    assert_eq!(finance_view.len(), 2);
}

#[tokio::test]
async fn listing_filters_by_status() {
    let harness = create_workflow_harness();
    let approved = harness.approved_event().await;
    harness.pending_event().await;

    let approved_only = harness
        .event_queries
        .handle_list(ListEventsQuery::new(facilities(), Some(EventStatus::Approved)))
        .await
        .expect("list");

    assert_eq!(
        approved_only.iter().map(|e| e.id()).collect::<Vec<_>>(),
        vec![approved.id()]
    );
}

#[tokio::test]
async fn foreign_team_lead_cannot_read_the_event() {
    let harness = create_workflow_harness();
    let event = harness.pending_event().await;

    let error = harness
        .event_queries
        .handle_get(GetEventQuery::new(workshop_lead(), event.id()))
        .await
        .expect_err("not the creator");

    assert!(matches!(error, WorkflowDomainError::Unauthorized(_)));
}

#[tokio::test]
async fn missing_event_is_not_found() {
    let harness = create_workflow_harness();

    let error = harness
        .event_queries
        .handle_get(GetEventQuery::new(admin(), uuid::Uuid::now_v7()))
        .await
        .expect_err("no such event");

    assert_eq!(error, WorkflowDomainError::NotFound("event".to_string()));
}

#[tokio::test]
async fn only_approved_events_can_be_completed_by_an_administrator() {
    let harness = create_workflow_harness();
    let pending = harness.pending_event().await;
    let approved = harness.approved_event().await;

    let not_admin = harness
        .event_commands
        .handle_complete(CompleteEventCommand::new(event_lead(), approved.id()))
        .await
        .expect_err("lead cannot complete");
    let still_pending = harness
        .event_commands
        .handle_complete(CompleteEventCommand::new(admin(), pending.id()))
        .await
        .expect_err("pending cannot complete");
    let completed = harness
        .event_commands
        .handle_complete(CompleteEventCommand::new(admin(), approved.id()))
        .await
        .expect("approved event completes");

    assert!(matches!(not_admin, WorkflowDomainError::Unauthorized(_)));
    assert!(matches!(still_pending, WorkflowDomainError::InvalidState(_)));
    assert_eq!(completed.status(), EventStatus::Completed);
}

#[tokio::test]
async fn transient_read_failures_are_retried() {
    let harness = create_workflow_harness();
    let event = harness.pending_event().await;
    harness.store.fail_next_event_reads(2);
    let reads_before = harness.store.event_read_calls();

    let loaded = harness
        .event_queries
        .handle_get(GetEventQuery::new(event_lead(), event.id()))
        .await
        .expect("third attempt succeeds");

    assert_eq!(loaded.id(), event.id());
    assert_eq!(harness.store.event_read_calls() - reads_before, 3);
}

#[tokio::test]
async fn read_failures_beyond_the_budget_surface_as_system_failure() {
    let harness = create_workflow_harness();
    let event = harness.pending_event().await;
    harness.store.fail_next_event_reads(5);

    let error = harness
        .event_queries
        .handle_get(GetEventQuery::new(event_lead(), event.id()))
        .await
        .expect_err("retries exhausted");

    assert!(matches!(error, WorkflowDomainError::SystemFailure(_)));
}

fn rename(principal: Principal, event_id: Uuid, name: &str) -> UpdateEventCommand {
    UpdateEventCommand::new(
        principal,
        event_id,
        Some(name.to_string()),
        None,
        None,
        None,
        None,
        None,
    )
    .expect("valid update command")
}

#[tokio::test]
async fn creator_edits_pending_event_and_keeps_untouched_fields() {
    let harness = create_workflow_harness();
    let event = harness.pending_event().await;

    let command = UpdateEventCommand::new(
        event_lead(),
        event.id(),
        None,
        Some("cultural"),
        None,
        Some(300),
        None,
        Some(OTHER_COORDINATOR_ID),
    )
    .expect("valid update command");

    let updated = harness
        .event_commands
        .handle_update(command)
        .await
        .expect("creator may edit while pending");

    assert_eq!(updated.details().name().value(), "Robotics Hackathon");
    assert_eq!(updated.details().event_type(), EventType::Cultural);
    assert_eq!(updated.details().expected_participants(), Some(300));
    assert_eq!(updated.details().description(), Some("Two day build sprint"));
    assert_eq!(updated.details().scheduled_at(), event.details().scheduled_at());
    assert_eq!(updated.coordinator_id(), Some(other_coordinator().id()));
    assert_eq!(updated.status(), EventStatus::Pending);
    assert_eq!(updated.review_cycle(), event.review_cycle());
    assert_eq!(harness.store.event(event.id()), Some(updated));
}

#[tokio::test]
async fn only_the_creating_team_lead_may_edit() {
    let harness = create_workflow_harness();
    let event = harness.pending_event().await;

    for principal in [workshop_lead(), finance(), coordinator()] {
        let error = harness
            .event_commands
            .handle_update(rename(principal, event.id(), "Renamed"))
            .await
            .expect_err("not the creator");
        assert!(matches!(error, WorkflowDomainError::Unauthorized(_)));
    }

    let by_admin = harness
        .event_commands
        .handle_update(rename(admin(), event.id(), "Renamed by admin"))
        .await
        .expect("administrator override");
    assert_eq!(by_admin.details().name().value(), "Renamed by admin");
}

#[tokio::test]
async fn decided_events_can_no_longer_be_edited() {
    let harness = create_workflow_harness();
    let approved = harness.approved_event().await;
    let rejected = harness.rejected_event().await;

    for event in [approved, rejected] {
        let error = harness
            .event_commands
            .handle_update(rename(event_lead(), event.id(), "Too late"))
            .await
            .expect_err("event already decided");
        assert!(matches!(error, WorkflowDomainError::InvalidState(_)));
        assert_eq!(
            harness.store.event(event.id()).expect("stored").details().name().value(),
            "Robotics Hackathon"
        );
    }
}

#[tokio::test]
async fn edit_checks_the_new_coordinator_and_the_event() {
    let harness = create_workflow_harness();
    let event = harness.pending_event().await;

    let bad_coordinator = UpdateEventCommand::new(
        event_lead(),
        event.id(),
        None,
        None,
        None,
        None,
        None,
        Some(FINANCE_ID),
    )
    .expect("well formed");
    let error = harness
        .event_commands
        .handle_update(bad_coordinator)
        .await
        .expect_err("finance cannot coordinate");
    assert!(matches!(error, WorkflowDomainError::InvalidInput(_)));

    let error = harness
        .event_commands
        .handle_update(rename(event_lead(), Uuid::now_v7(), "Ghost"))
        .await
        .expect_err("no such event");
    assert!(matches!(error, WorkflowDomainError::NotFound(_)));
}

#[test]
fn update_command_needs_at_least_one_valid_field() {
    let empty = UpdateEventCommand::new(event_lead(), Uuid::now_v7(), None, None, None, None, None, None);
    assert!(matches!(empty, Err(WorkflowDomainError::InvalidInput(_))));

    let blank_name = UpdateEventCommand::new(
        event_lead(),
        Uuid::now_v7(),
        Some("   ".to_string()),
        None,
        None,
        None,
        None,
        None,
    );
    assert!(matches!(blank_name, Err(WorkflowDomainError::InvalidInput(_))));

    let zero_participants = UpdateEventCommand::new(
        event_lead(),
        Uuid::now_v7(),
        None,
        None,
        None,
        Some(0),
        None,
        None,
    )
    .expect("range is checked against the merged details");
    let event_details = create_event_command(event_lead(), None).details().clone();
    assert!(matches!(
        zero_participants.merge_into(&event_details),
        Err(WorkflowDomainError::InvalidInput(_))
    ));
}
