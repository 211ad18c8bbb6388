use std::sync::Arc;

use event_budget_workflow::{
    approval_workflow::domain::{
        model::{
            commands::{
                decide_budget_command::DecideBudgetCommand,
                resubmit_budget_command::ResubmitBudgetCommand,
            },
            enums::budget_decision::BudgetDecision,
            queries::list_approval_history_query::ListApprovalHistoryQuery,
        },
        services::{
            approval_command_service::ApprovalCommandService,
            approval_query_service::ApprovalQueryService,
        },
    },
    budgeting::domain::{
        model::commands::submit_budget_command::SubmitBudgetCommand,
        services::budget_command_service::BudgetCommandService,
    },
    event_management::domain::model::enums::event_status::EventStatus,
    notifications::{
        application::{
            acl::notification_facade_impl::NotificationFacadeImpl,
            workers::notification_delivery_worker::NotificationDeliveryWorker,
        },
        domain::model::events::workflow_outcome::WorkflowOutcome,
        infrastructure::outbox::mpsc_notification_outbox_impl::MpscNotificationOutboxImpl,
        interfaces::acl::notification_facade::NotificationFacade,
    },
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};
use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::support::{
    WorkflowHarness, create_workflow_harness, create_workflow_harness_publishing_to,
    fakes::{FlakyDeliveryRepository, RecordingOutbox, UnreachableDirectoryRepository},
    fixtures::{
        PRIZE_MONEY_ID, admin, coordinator, event_lead, fast_retry_policy, finance, line,
        second_finance, workshop_lead,
    },
};

fn decide(reviewer_is_second: bool, event_id: Uuid, decision: &str) -> DecideBudgetCommand {
    let reviewer = if reviewer_is_second {
        second_finance()
    } else {
        finance()
    };
    DecideBudgetCommand::new(reviewer, event_id, decision, "Within allocation".to_string())
        .expect("valid decision")
}

#[tokio::test]
async fn approval_moves_the_event_and_appends_history() {
    let harness = create_workflow_harness();
    let event = harness.pending_event_with_budget().await;

    let record = harness
        .approval_commands
        .handle_decide(decide(false, event.id(), "approved"))
        .await
        .expect("decision recorded");

    assert_eq!(record.decision(), BudgetDecision::Approved);
    assert_eq!(record.review_cycle(), 1);
    assert_eq!(record.reviewer_id(), finance().id());
    assert_eq!(
        harness.store.event(event.id()).map(|e| e.status()),
        Some(EventStatus::Approved)
    );

    let history = harness
        .approval_queries
        .handle_list_history(ListApprovalHistoryQuery::new(event_lead(), event.id()))
        .await
        .expect("history");
    assert_eq!(history, vec![record]);

    let decided = harness
        .notifications
        .published()
        .into_iter()
        .find(|o| matches!(o, WorkflowOutcome::BudgetDecided { .. }));
    assert!(matches!(
        decided,
        Some(WorkflowOutcome::BudgetDecided { ref decision, review_cycle: 1, .. }) if decision == "APPROVED"
    ));
}

#[tokio::test]
async fn second_decision_in_the_same_cycle_is_refused() {
    let harness = create_workflow_harness();
    let event = harness.approved_event().await;

    let error = harness
        .approval_commands
        .handle_decide(decide(true, event.id(), "REJECTED"))
        .await
        .expect_err("already decided");

    assert_eq!(error, WorkflowDomainError::AlreadyDecided);
    assert_eq!(harness.store.approvals().len(), 1);
    assert_eq!(
        harness.store.event(event.id()).map(|e| e.status()),
        Some(EventStatus::Approved)
    );
}

#[tokio::test]
async fn stale_reviewers_race_and_exactly_one_decision_lands() {
    let harness = create_workflow_harness();
    let event = harness.pending_event_with_budget().await;
    // Both reviewers keep reading PENDING while the first write lands.
    harness.store.freeze_event_reads();

    let (first, second) = tokio::join!(
        harness
            .approval_commands
            .handle_decide(decide(false, event.id(), "APPROVED")),
        harness
            .approval_commands
            .handle_decide(decide(true, event.id(), "REJECTED")),
    );

    let outcomes = [first, second];
    let applied: Vec<_> = outcomes.iter().filter_map(|r| r.as_ref().ok()).collect();
    let refused: Vec<_> = outcomes.iter().filter_map(|r| r.as_ref().err()).collect();

    assert_eq!(applied.len(), 1);
    assert_eq!(refused, vec![&WorkflowDomainError::AlreadyDecided]);
    assert_eq!(harness.store.approvals().len(), 1);

    let stored_status = harness.store.event(event.id()).map(|e| e.status());
    assert_eq!(stored_status, Some(applied[0].decision().target_status()));

    let decided_count = harness
        .notifications
        .published()
        .iter()
        .filter(|o| matches!(o, WorkflowOutcome::BudgetDecided { .. }))
        .count();
    assert_eq!(decided_count, 1);
}

#[tokio::test]
async fn only_finance_or_admin_may_decide() {
    let harness = create_workflow_harness();
    let event = harness.pending_event_with_budget().await;

    for principal in [event_lead(), workshop_lead(), coordinator()] {
        let command = DecideBudgetCommand::new(
            principal,
            event.id(),
            "APPROVED",
            "Looks fine".to_string(),
        )
        .expect("valid decision");

        let error = harness
            .approval_commands
            .handle_decide(command)
            .await
            .expect_err("not a reviewer");
        assert!(matches!(error, WorkflowDomainError::Unauthorized(_)));
    }

    let admin_command =
        DecideBudgetCommand::new(admin(), event.id(), "REJECTED", "Over cap".to_string())
            .expect("valid decision");
    harness
        .approval_commands
        .handle_decide(admin_command)
        .await
        .expect("admin may decide");
}

#[test]
fn decision_input_is_validated() {
    let unknown = DecideBudgetCommand::new(finance(), Uuid::now_v7(), "maybe", "x".to_string());
    let blank_remarks =
        DecideBudgetCommand::new(finance(), Uuid::now_v7(), "APPROVED", "  ".to_string());

    assert!(matches!(unknown, Err(WorkflowDomainError::InvalidInput(_))));
    assert!(matches!(blank_remarks, Err(WorkflowDomainError::InvalidInput(_))));
}

#[tokio::test]
async fn deciding_a_missing_event_is_not_found() {
    let harness = create_workflow_harness();

    let error = harness
        .approval_commands
        .handle_decide(decide(false, Uuid::now_v7(), "APPROVED"))
        .await
        .expect_err("no event");

    assert_eq!(error, WorkflowDomainError::NotFound("event".to_string()));
}

#[tokio::test]
async fn rejected_budget_can_be_revised_and_reviewed_again() {
    let harness = create_workflow_harness();
    let event = harness.rejected_event().await;

    let reopened = harness
        .approval_commands
        .handle_resubmit(
            ResubmitBudgetCommand::new(
                event_lead(),
                event.id(),
                Some("  trimmed prize pool  ".to_string()),
            )
            .expect("valid resubmission"),
        )
        .await
        .expect("reopened");

    assert_eq!(reopened.status(), EventStatus::Pending);
    assert_eq!(reopened.review_cycle(), 2);
    assert!(harness.notifications.published().iter().any(|o| matches!(
        o,
        WorkflowOutcome::BudgetResubmitted { review_cycle: 2, note: Some(note), .. } if note == "trimmed prize pool"
    )));

    harness
        .budget_commands
        .handle_submit(
            SubmitBudgetCommand::new(
                event_lead(),
                event.id(),
                vec![line(PRIZE_MONEY_ID, dec!(9000), None)],
            )
            .expect("valid submission"),
        )
        .await
        .expect("budget editable again");

    let second = harness
        .approval_commands
        .handle_decide(decide(true, event.id(), "APPROVED"))
        .await
        .expect("second cycle decision");
    assert_eq!(second.review_cycle(), 2);

    let history = harness
        .approval_queries
        .handle_list_history(ListApprovalHistoryQuery::new(finance(), event.id()))
        .await
        .expect("history");
    assert_eq!(
        history
            .iter()
            .map(|r| (r.review_cycle(), r.decision()))
            .collect::<Vec<_>>(),
        vec![(1, BudgetDecision::Rejected), (2, BudgetDecision::Approved)]
    );
}

#[tokio::test]
async fn resubmission_requires_a_rejected_event_and_its_creator() {
    let harness = create_workflow_harness();
    let pending = harness.pending_event().await;
    let rejected = harness.rejected_event().await;

    let not_rejected = harness
        .approval_commands
        .handle_resubmit(
            ResubmitBudgetCommand::new(event_lead(), pending.id(), None).expect("command"),
        )
        .await
        .expect_err("pending cannot be resubmitted");
    let not_creator = harness
        .approval_commands
        .handle_resubmit(
            ResubmitBudgetCommand::new(workshop_lead(), rejected.id(), None).expect("command"),
        )
        .await
        .expect_err("foreign lead");

    assert!(matches!(not_rejected, WorkflowDomainError::InvalidState(_)));
    assert!(matches!(not_creator, WorkflowDomainError::Unauthorized(_)));
}

#[tokio::test]
async fn history_is_hidden_from_unrelated_team_leads() {
    let harness = create_workflow_harness();
    let event = harness.approved_event().await;

    let error = harness
        .approval_queries
        .handle_list_history(ListApprovalHistoryQuery::new(workshop_lead(), event.id()))
        .await
        .expect_err("not visible");

    assert!(matches!(error, WorkflowDomainError::Unauthorized(_)));
}

async fn submit_and_approve(harness: &WorkflowHarness) {
    let event = harness.pending_event_with_budget().await;

    let record = harness
        .approval_commands
        .handle_decide(decide(false, event.id(), "APPROVED"))
        .await
        .expect("decision recorded even though notifications are lost");

    assert_eq!(record.decision(), BudgetDecision::Approved);
    assert_eq!(
        harness.store.event(event.id()).map(|e| e.status()),
        Some(EventStatus::Approved)
    );
    assert_eq!(harness.store.approvals().len(), 1);
    assert_eq!(harness.store.budget_lines().len(), 2);
}

#[tokio::test]
async fn decisions_commit_when_the_outbox_is_closed_or_full() {
    let (closed, receiver) = MpscNotificationOutboxImpl::channel(4);
    drop(receiver);
    let facades: [Arc<dyn NotificationFacade>; 2] = [
        Arc::new(NotificationFacadeImpl::new(Arc::new(closed))),
        Arc::new(NotificationFacadeImpl::new(Arc::new(RecordingOutbox::with_capacity(0)))),
    ];

    for facade in facades {
        submit_and_approve(&create_workflow_harness_publishing_to(facade)).await;
    }
}

#[tokio::test]
async fn decisions_commit_while_delivery_is_stuck_on_the_directory() {
    let (outbox, receiver) = MpscNotificationOutboxImpl::channel(1);
    let worker = NotificationDeliveryWorker::new(
        receiver,
        Arc::new(UnreachableDirectoryRepository),
        Arc::new(FlakyDeliveryRepository::failing(0)),
        fast_retry_policy(),
    )
    .spawn();
    let harness = create_workflow_harness_publishing_to(Arc::new(NotificationFacadeImpl::new(
        Arc::new(outbox),
    )));

    submit_and_approve(&harness).await;

    worker.abort();
}
