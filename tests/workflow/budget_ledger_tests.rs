use event_budget_workflow::{
    budgeting::domain::{
        model::{
            commands::submit_budget_command::SubmitBudgetCommand,
            queries::get_budget_query::GetBudgetQuery,
            value_objects::{budget_amount::BudgetAmount, budget_line_draft::BudgetLineDraft},
        },
        services::{
            budget_command_service::BudgetCommandService, budget_query_service::BudgetQueryService,
        },
    },
    event_management::domain::model::enums::event_status::EventStatus,
    notifications::domain::model::events::workflow_outcome::WorkflowOutcome,
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};
use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::support::{
    create_workflow_harness,
    fixtures::{
        EQUIPMENT_ID, MARKETING_ID, PRIZE_MONEY_ID, REFRESHMENTS_ID, admin, coordinator,
        event_lead, finance, line, uuid, workshop_lead,
    },
};

#[tokio::test]
async fn submitted_lines_come_back_in_catalog_order() {
    let harness = create_workflow_harness();
    let event = harness.pending_event().await;

    let lines = harness
        .budget_commands
        .handle_submit(
            SubmitBudgetCommand::new(
                event_lead(),
                event.id(),
                vec![
                    line(MARKETING_ID, dec!(800), None),
                    line(PRIZE_MONEY_ID, dec!(15000), None),
                    line(REFRESHMENTS_ID, dec!(2500.75), Some(dec!(500))),
                ],
            )
            .expect("valid submission"),
        )
        .await
        .expect("lines stored");

    assert_eq!(
        lines.iter().map(|l| l.category_id()).collect::<Vec<_>>(),
        vec![uuid(PRIZE_MONEY_ID), uuid(REFRESHMENTS_ID), uuid(MARKETING_ID)]
    );
    assert_eq!(harness.store.budget_lines().len(), 3);
}

#[tokio::test]
async fn resubmitting_a_category_replaces_its_line() {
    let harness = create_workflow_harness();
    let event = harness.pending_event_with_budget().await;

    harness
        .budget_commands
        .handle_submit(
            SubmitBudgetCommand::new(
                event_lead(),
                event.id(),
                vec![line(PRIZE_MONEY_ID, dec!(12000), None)],
            )
            .expect("valid submission"),
        )
        .await
        .expect("line replaced");

    let summary = harness
        .budget_queries
        .handle_get_summary(GetBudgetQuery::new(event_lead(), event.id()))
        .await
        .expect("summary");

    assert_eq!(summary.lines().len(), 2);
    assert_eq!(summary.lines()[0].amount().value(), dec!(12000));
    assert_eq!(summary.requested_total(), dec!(16200.50));
    assert_eq!(summary.sponsor_total(), dec!(1000));
    assert_eq!(summary.net_requested(), dec!(15200.50));
}

#[test]
fn duplicate_categories_keep_the_last_value_at_the_first_position() {
    let command = SubmitBudgetCommand::new(
        event_lead(),
        Uuid::now_v7(),
        vec![
            line(EQUIPMENT_ID, dec!(100), None),
            line(PRIZE_MONEY_ID, dec!(200), None),
            line(EQUIPMENT_ID, dec!(300), None),
        ],
    )
    .expect("valid submission");

    let lines = command.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].category_id(), uuid(EQUIPMENT_ID));
    assert_eq!(lines[0].amount().value(), dec!(300));
}

#[test]
fn empty_submission_is_invalid() {
    let result = SubmitBudgetCommand::new(event_lead(), Uuid::now_v7(), Vec::new());

    assert!(matches!(result, Err(WorkflowDomainError::InvalidInput(_))));
}

#[test]
fn amounts_must_be_non_negative_with_at_most_two_decimals() {
    assert!(BudgetAmount::new(dec!(-0.01), "amount").is_err());
    assert!(BudgetAmount::new(dec!(10.005), "amount").is_err());
    assert!(BudgetLineDraft::new(uuid(PRIZE_MONEY_ID), dec!(10), Some(dec!(-1)), None).is_err());

    let amount = BudgetAmount::new(dec!(10.50), "amount").expect("valid amount");
    assert_eq!(amount.value(), dec!(10.5));
    assert_eq!(BudgetAmount::new(dec!(0), "amount").expect("zero"), BudgetAmount::ZERO);
}

#[test]
fn amounts_are_capped_at_the_stored_precision() {
    let largest = BudgetAmount::new(dec!(999999999999.99), "amount").expect("largest amount");
    assert_eq!(largest, BudgetAmount::max());

    assert!(matches!(
        BudgetAmount::new(dec!(1000000000000.00), "amount"),
        Err(WorkflowDomainError::InvalidInput(_))
    ));
    assert!(matches!(
        BudgetLineDraft::new(
            uuid(PRIZE_MONEY_ID),
            dec!(100),
            Some(dec!(10000000000000)),
            None
        ),
        Err(WorkflowDomainError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn unknown_category_is_rejected_without_writing() {
    let harness = create_workflow_harness();
    let event = harness.pending_event().await;

    let error = harness
        .budget_commands
        .handle_submit(
            SubmitBudgetCommand::new(
                event_lead(),
                event.id(),
                vec![
                    line(PRIZE_MONEY_ID, dec!(100), None),
                    BudgetLineDraft::new(Uuid::now_v7(), dec!(50), None, None).expect("draft"),
                ],
            )
            .expect("valid submission"),
        )
        .await
        .expect_err("unknown category");

    assert!(matches!(error, WorkflowDomainError::InvalidInput(_)));
    assert!(harness.store.budget_lines().is_empty());
}

#[tokio::test]
async fn only_the_creator_may_edit_the_budget() {
    let harness = create_workflow_harness();
    let event = harness.pending_event().await;

    for principal in [workshop_lead(), finance(), coordinator()] {
        let error = harness
            .budget_commands
            .handle_submit(
                SubmitBudgetCommand::new(
                    principal,
                    event.id(),
                    vec![line(PRIZE_MONEY_ID, dec!(100), None)],
                )
                .expect("valid submission"),
            )
            .await
            .expect_err("not the creator");

        assert!(matches!(error, WorkflowDomainError::Unauthorized(_)));
    }
}

#[tokio::test]
async fn budget_is_frozen_once_the_event_leaves_pending() {
    let harness = create_workflow_harness();
    let event = harness.approved_event().await;

    let error = harness
        .budget_commands
        .handle_submit(
            SubmitBudgetCommand::new(
                event_lead(),
                event.id(),
                vec![line(PRIZE_MONEY_ID, dec!(1), None)],
            )
            .expect("valid submission"),
        )
        .await
        .expect_err("approved budget is frozen");

    assert!(matches!(error, WorkflowDomainError::InvalidState(_)));
    assert_eq!(harness.store.budget_lines()[0].amount().value(), dec!(15000));
}

#[tokio::test]
async fn store_guard_rejects_a_write_that_raced_a_decision() {
    let harness = create_workflow_harness();
    let event = harness.pending_event_with_budget().await;
    harness.store.freeze_event_reads();
    harness.store.force_status(event.id(), EventStatus::Approved);

    let error = harness
        .budget_commands
        .handle_submit(
            SubmitBudgetCommand::new(
                event_lead(),
                event.id(),
                vec![line(PRIZE_MONEY_ID, dec!(1), None)],
            )
            .expect("valid submission"),
        )
        .await
        .expect_err("event moved on under the write");

    assert!(matches!(error, WorkflowDomainError::InvalidState(_)));
    assert_eq!(harness.store.budget_lines()[0].amount().value(), dec!(15000));
}

#[tokio::test]
async fn team_lead_submission_notifies_finance_but_admin_edits_do_not() {
    let harness = create_workflow_harness();
    let event = harness.pending_event_with_budget().await;

    harness
        .budget_commands
        .handle_submit(
            SubmitBudgetCommand::new(
                admin(),
                event.id(),
                vec![line(MARKETING_ID, dec!(100), None)],
            )
            .expect("valid submission"),
        )
        .await
        .expect("admin may edit");

    let submissions: Vec<_> = harness
        .notifications
        .published()
        .into_iter()
        .filter_map(|outcome| match outcome {
            WorkflowOutcome::BudgetSubmitted {
                requested_total,
                line_count,
                ..
            } => Some((requested_total, line_count)),
            _ => None,
        })
        .collect();

    assert_eq!(submissions, vec![(dec!(19200.50), 2)]);
}

#[tokio::test]
async fn coordinator_reads_the_summary_of_a_coordinated_event() {
    let harness = create_workflow_harness();
    let event = harness.pending_event_with_budget().await;

    let summary = harness
        .budget_queries
        .handle_get_summary(GetBudgetQuery::new(coordinator(), event.id()))
        .await
        .expect("coordinator may view");

    assert_eq!(summary.lines().len(), 2);
    assert_eq!(summary.lines()[1].net_requested(), dec!(3200.50));
}

#[test]
fn categories_are_listed_in_display_order() {
    let harness = create_workflow_harness();

    let names: Vec<String> = harness
        .budget_queries
        .list_categories()
        .iter()
        .map(|c| c.name().to_string())
        .collect();

    assert_eq!(
        names,
        vec![
            "Prize Money",
            "Facilities",
            "Equipment",
            "Refreshments",
            "Marketing",
            "Miscellaneous"
        ]
    );
}
