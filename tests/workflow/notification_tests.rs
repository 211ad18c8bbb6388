use std::{sync::Arc, time::Duration};

use event_budget_workflow::{
    iam_integration::domain::model::value_objects::principal_id::PrincipalId,
    notifications::{
        application::{
            acl::notification_facade_impl::NotificationFacadeImpl,
            command_services::inbox_command_service_impl::InboxCommandServiceImpl,
            query_services::inbox_query_service_impl::InboxQueryServiceImpl,
            workers::notification_delivery_worker::NotificationDeliveryWorker,
        },
        domain::{
            model::{
                commands::{
                    mark_all_notifications_read_command::MarkAllNotificationsReadCommand,
                    mark_notification_read_command::MarkNotificationReadCommand,
                },
                enums::notification_template_key::NotificationTemplateKey,
                events::workflow_outcome::WorkflowOutcome,
                queries::list_inbox_query::ListInboxQuery,
                value_objects::{
                    notification_intent::NotificationIntent, outcome_subject::OutcomeSubject,
                },
            },
            services::{
                inbox_command_service::InboxCommandService,
                inbox_query_service::InboxQueryService,
                notification_dispatcher::NotificationDispatcher,
            },
        },
        infrastructure::outbox::{
            mpsc_notification_outbox_impl::MpscNotificationOutboxImpl,
            notification_outbox::{NotificationOutbox, NotificationOutboxError},
        },
        interfaces::acl::notification_facade::NotificationFacade,
    },
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};
use rust_decimal_macros::dec;
use serde_json::json;
use uuid::Uuid;

use crate::support::{
    fakes::{
        FlakyDeliveryRepository, InMemoryWorkflowStore, RecordingOutbox,
        UnreachableDirectoryRepository,
    },
    fixtures::{
        coordinator, event_lead, fast_retry_policy, finance, retired_finance, second_finance,
    },
};

fn subject(coordinator_id: Option<PrincipalId>) -> OutcomeSubject {
    OutcomeSubject {
        event_id: Uuid::now_v7(),
        event_name: "Robotics Hackathon".to_string(),
        creator_id: event_lead().id(),
        coordinator_id,
    }
}

fn recipients(intents: &[NotificationIntent]) -> Vec<PrincipalId> {
    intents.iter().map(|i| i.recipient_id()).collect()
}

fn directory_with_finance() -> Arc<InMemoryWorkflowStore> {
    let store = Arc::new(InMemoryWorkflowStore::new());
    store.add_principal(finance(), "Finance One", true);
    store.add_principal(second_finance(), "Finance Two", true);
    store.add_principal(retired_finance(), "Finance Retired", false);
    store.add_principal(event_lead(), "Event Lead", true);
    store.add_principal(coordinator(), "Coordinator", true);
    store
}

fn worker_over(store: &Arc<InMemoryWorkflowStore>) -> NotificationDeliveryWorker {
    let (_outbox, receiver) = MpscNotificationOutboxImpl::channel(4);
    NotificationDeliveryWorker::new(receiver, store.clone(), store.clone(), fast_retry_policy())
}

fn decided(subject: OutcomeSubject) -> WorkflowOutcome {
    WorkflowOutcome::BudgetDecided {
        subject,
        decision: "APPROVED".to_string(),
        remarks: "Within the semester allocation".to_string(),
        reviewer_id: finance().id(),
        review_cycle: 1,
    }
}

fn submitted() -> WorkflowOutcome {
    WorkflowOutcome::BudgetSubmitted {
        subject: subject(None),
        requested_total: dec!(19200.50),
        line_count: 2,
    }
}

fn intent(key: NotificationTemplateKey) -> NotificationIntent {
    NotificationIntent::new(
        event_lead().id(),
        key,
        json!({ "event_name": "Robotics Hackathon" }),
    )
}

#[test]
fn decision_reaches_creator_then_coordinator() {
    let outcome = WorkflowOutcome::BudgetDecided {
        subject: subject(Some(coordinator().id())),
        decision: "REJECTED".to_string(),
        remarks: "Prize pool too large".to_string(),
        reviewer_id: finance().id(),
        review_cycle: 1,
    };

    let intents = NotificationDispatcher::dispatch(&outcome, &[]);

    assert_eq!(recipients(&intents), vec![event_lead().id(), coordinator().id()]);
    assert!(intents
        .iter()
        .all(|i| i.template_key() == NotificationTemplateKey::BudgetDecided));
    assert_eq!(intents[0].payload()["decision"], "REJECTED");
    assert_eq!(intents[0].payload()["event_name"], "Robotics Hackathon");
}

#[test]
fn creator_who_coordinates_is_notified_once() {
    let outcome = WorkflowOutcome::VenueAssigned {
        subject: subject(Some(event_lead().id())),
        venue_id: Uuid::now_v7(),
        venue_name: "Main Auditorium".to_string(),
    };

    let intents = NotificationDispatcher::dispatch(&outcome, &[]);

    assert_eq!(recipients(&intents), vec![event_lead().id()]);
}

#[test]
fn submission_fans_out_to_finance() {
    let outcome = WorkflowOutcome::BudgetSubmitted {
        subject: subject(None),
        requested_total: dec!(19200.50),
        line_count: 2,
    };

    let intents = NotificationDispatcher::dispatch(
        &outcome,
        &[finance().id(), second_finance().id(), finance().id()],
    );

    assert_eq!(recipients(&intents), vec![finance().id(), second_finance().id()]);
    assert_eq!(intents[1].payload()["requested_total"], "19200.50");
    assert_ne!(intents[0].id(), intents[1].id());
}

#[test]
fn event_creation_without_coordinator_notifies_nobody() {
    let intents = NotificationDispatcher::dispatch(
        &WorkflowOutcome::EventCreated {
            subject: subject(None),
        },
        &[finance().id()],
    );

    assert!(intents.is_empty());
}

#[test]
fn expense_goes_to_coordinator_or_falls_back_to_creator() {
    let with_coordinator = WorkflowOutcome::ExpenseRecorded {
        subject: subject(Some(coordinator().id())),
        expense_id: Uuid::now_v7(),
        item_name: "Projector".to_string(),
        amount: dec!(1500),
    };
    let without_coordinator = WorkflowOutcome::ExpenseRecorded {
        subject: subject(None),
        expense_id: Uuid::now_v7(),
        item_name: "Projector".to_string(),
        amount: dec!(1500),
    };

    assert_eq!(
        recipients(&NotificationDispatcher::dispatch(&with_coordinator, &[])),
        vec![coordinator().id()]
    );
    assert_eq!(
        recipients(&NotificationDispatcher::dispatch(&without_coordinator, &[])),
        vec![event_lead().id()]
    );
}

#[test]
fn publish_only_enqueues_the_outcome() {
    let outbox = Arc::new(RecordingOutbox::with_capacity(16));
    let facade = NotificationFacadeImpl::new(outbox.clone());
    let outcome = WorkflowOutcome::BudgetResubmitted {
        subject: subject(None),
        review_cycle: 2,
        note: None,
    };

    facade.publish(outcome.clone());

    assert_eq!(outbox.accepted(), vec![outcome]);
}

#[test]
fn full_outbox_drops_outcomes_without_failing_the_caller() {
    let outbox = Arc::new(RecordingOutbox::with_capacity(1));
    let facade = NotificationFacadeImpl::new(outbox.clone());
    let first = decided(subject(Some(coordinator().id())));

    facade.publish(first.clone());
    facade.publish(submitted());

    assert_eq!(outbox.accepted(), vec![first]);
}

#[test]
fn bounded_channel_reports_full_and_closed() {
    let (outbox, receiver) = MpscNotificationOutboxImpl::channel(1);

    assert_eq!(outbox.enqueue(submitted()), Ok(()));
    assert_eq!(outbox.enqueue(submitted()), Err(NotificationOutboxError::Full));

    drop(receiver);
    assert_eq!(outbox.enqueue(submitted()), Err(NotificationOutboxError::Closed));
}

#[tokio::test]
async fn worker_resolves_active_finance_members_for_submissions() {
    let store = directory_with_finance();
    let worker = worker_over(&store);

    let delivered = worker.process(&submitted()).await;

    assert_eq!(delivered, 2);
    assert_eq!(store.inbox_of(finance().id()).len(), 1);
    assert_eq!(store.inbox_of(second_finance().id()).len(), 1);
    assert!(store.inbox_of(retired_finance().id()).is_empty());
    assert_eq!(
        store.inbox_of(finance().id())[0].template_key(),
        NotificationTemplateKey::BudgetSubmitted
    );
}

#[tokio::test]
async fn unreachable_directory_drops_finance_outcomes_only() {
    let (_outbox, receiver) = MpscNotificationOutboxImpl::channel(4);
    let repository = Arc::new(FlakyDeliveryRepository::failing(0));
    let worker = NotificationDeliveryWorker::new(
        receiver,
        Arc::new(UnreachableDirectoryRepository),
        repository.clone(),
        fast_retry_policy(),
    );

    let dropped = tokio::time::timeout(Duration::from_secs(5), worker.process(&submitted()))
        .await
        .expect("directory lookups time out");
    assert_eq!(dropped, 0);
    assert_eq!(repository.attempts(), 0);

    let delivered = worker.process(&decided(subject(None))).await;
    assert_eq!(delivered, 1);
    assert_eq!(recipients(&repository.delivered()), vec![event_lead().id()]);
}

#[tokio::test]
async fn worker_retries_transient_failures_then_delivers() {
    let (_outbox, receiver) = MpscNotificationOutboxImpl::channel(4);
    let repository = Arc::new(FlakyDeliveryRepository::failing(2));
    let worker = NotificationDeliveryWorker::new(
        receiver,
        directory_with_finance(),
        repository.clone(),
        fast_retry_policy(),
    );
    let pending = intent(NotificationTemplateKey::BudgetDecided);

    assert!(worker.deliver(&pending).await);
    assert_eq!(repository.attempts(), 3);
    assert_eq!(repository.delivered(), vec![pending]);
}

#[tokio::test]
async fn worker_gives_up_after_the_retry_budget() {
    let (_outbox, receiver) = MpscNotificationOutboxImpl::channel(4);
    let repository = Arc::new(FlakyDeliveryRepository::failing(10));
    let worker = NotificationDeliveryWorker::new(
        receiver,
        directory_with_finance(),
        repository.clone(),
        fast_retry_policy(),
    );

    assert!(!worker.deliver(&intent(NotificationTemplateKey::VenueAssigned)).await);
    assert_eq!(repository.attempts(), 3);
    assert!(repository.delivered().is_empty());
}

#[tokio::test]
async fn worker_drains_in_order_and_stops_when_the_outbox_closes() {
    let (outbox, receiver) = MpscNotificationOutboxImpl::channel(8);
    let repository = Arc::new(FlakyDeliveryRepository::failing(1));
    let worker = NotificationDeliveryWorker::new(
        receiver,
        directory_with_finance(),
        repository.clone(),
        fast_retry_policy(),
    );

    let sent = [
        WorkflowOutcome::EventCreated {
            subject: subject(Some(coordinator().id())),
        },
        submitted(),
        decided(subject(None)),
    ];
    for outcome in &sent {
        outbox.enqueue(outcome.clone()).expect("queue has room");
    }
    drop(outbox);

    worker.spawn().await.expect("worker task finishes");

    let keys: Vec<NotificationTemplateKey> = repository
        .delivered()
        .iter()
        .map(|i| i.template_key())
        .collect();
    assert_eq!(
        keys,
        vec![
            NotificationTemplateKey::EventCreated,
            NotificationTemplateKey::BudgetSubmitted,
            NotificationTemplateKey::BudgetSubmitted,
            NotificationTemplateKey::BudgetDecided,
        ]
    );
}

async fn inbox_with_three_decisions(store: &Arc<InMemoryWorkflowStore>) -> Vec<WorkflowOutcome> {
    let worker = worker_over(store);
    let mut outcomes = Vec::new();
    for _ in 0..3 {
        let outcome = decided(subject(Some(coordinator().id())));
        worker.process(&outcome).await;
        outcomes.push(outcome);
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    outcomes
}

#[tokio::test]
async fn inbox_lists_newest_first_with_the_unread_count() {
    let store = directory_with_finance();
    let outcomes = inbox_with_three_decisions(&store).await;
    let queries = InboxQueryServiceImpl::new(store.clone(), fast_retry_policy());

    let inbox = queries
        .handle_list(ListInboxQuery::new(event_lead(), false))
        .await
        .expect("inbox listed");

    assert_eq!(inbox.unread_count, 3);
    let event_ids: Vec<Uuid> = inbox
        .notifications
        .iter()
        .map(|n| {
            Uuid::parse_str(n.payload()["event_id"].as_str().expect("event id in payload"))
                .expect("uuid payload")
        })
        .collect();
    let newest_first: Vec<Uuid> = outcomes.iter().rev().map(|o| o.subject().event_id).collect();
    assert_eq!(event_ids, newest_first);
    assert!(inbox.notifications.iter().all(|n| n.recipient_id() == event_lead().id()));
}

#[tokio::test]
async fn marking_read_is_scoped_to_the_recipient_and_keeps_the_first_read_time() {
    let store = directory_with_finance();
    inbox_with_three_decisions(&store).await;
    let commands = InboxCommandServiceImpl::new(store.clone(), fast_retry_policy());
    let queries = InboxQueryServiceImpl::new(store.clone(), fast_retry_policy());
    let target = store.inbox_of(event_lead().id())[0].id();

    let error = commands
        .handle_mark_read(MarkNotificationReadCommand::new(coordinator(), target))
        .await
        .expect_err("belongs to the event lead");
    assert!(matches!(error, WorkflowDomainError::NotFound(_)));

    let first = commands
        .handle_mark_read(MarkNotificationReadCommand::new(event_lead(), target))
        .await
        .expect("marked read");
    let again = commands
        .handle_mark_read(MarkNotificationReadCommand::new(event_lead(), target))
        .await
        .expect("marking twice is fine");
    assert!(first.read_at().is_some());
    assert_eq!(again.read_at(), first.read_at());

    let unread = queries
        .handle_list(ListInboxQuery::new(event_lead(), true))
        .await
        .expect("inbox listed");
    assert_eq!(unread.unread_count, 2);
    assert_eq!(unread.notifications.len(), 2);
    assert!(unread.notifications.iter().all(|n| n.id() != target));

    let error = commands
        .handle_mark_read(MarkNotificationReadCommand::new(event_lead(), Uuid::now_v7()))
        .await
        .expect_err("unknown notification");
    assert!(matches!(error, WorkflowDomainError::NotFound(_)));
}

#[tokio::test]
async fn mark_all_read_only_touches_the_callers_unread_notifications() {
    let store = directory_with_finance();
    inbox_with_three_decisions(&store).await;
    let commands = InboxCommandServiceImpl::new(store.clone(), fast_retry_policy());
    let first = store.inbox_of(event_lead().id())[0].id();
    commands
        .handle_mark_read(MarkNotificationReadCommand::new(event_lead(), first))
        .await
        .expect("marked read");

    let marked = commands
        .handle_mark_all_read(MarkAllNotificationsReadCommand::new(event_lead()))
        .await
        .expect("all marked");
    assert_eq!(marked, 2);
    assert!(store.inbox_of(event_lead().id()).iter().all(|n| n.is_read()));
    assert!(store.inbox_of(coordinator().id()).iter().all(|n| !n.is_read()));

    let marked_again = commands
        .handle_mark_all_read(MarkAllNotificationsReadCommand::new(event_lead()))
        .await
        .expect("nothing left");
    assert_eq!(marked_again, 0);
}
