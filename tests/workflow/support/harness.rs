use std::sync::Arc;

use event_budget_workflow::{
    access_control::application::{
        acl::access_control_facade_impl::AccessControlFacadeImpl,
        query_services::access_control_query_service_impl::AccessControlQueryServiceImpl,
    },
    approval_workflow::{
        application::{
            command_services::approval_command_service_impl::ApprovalCommandServiceImpl,
            query_services::approval_query_service_impl::ApprovalQueryServiceImpl,
        },
        domain::{
            model::commands::decide_budget_command::DecideBudgetCommand,
            services::approval_command_service::ApprovalCommandService,
        },
    },
    budgeting::{
        application::{
            command_services::budget_command_service_impl::BudgetCommandServiceImpl,
            query_services::budget_query_service_impl::BudgetQueryServiceImpl,
        },
        domain::{
            model::commands::submit_budget_command::SubmitBudgetCommand,
            services::{
                budget_category_catalog::BudgetCategoryCatalog,
                budget_command_service::BudgetCommandService,
            },
        },
    },
    event_management::{
        application::{
            acl::event_registry_facade_impl::EventRegistryFacadeImpl,
            command_services::event_command_service_impl::EventCommandServiceImpl,
            query_services::event_query_service_impl::EventQueryServiceImpl,
        },
        domain::{model::entities::event::Event, services::event_command_service::EventCommandService},
    },
    notifications::interfaces::acl::notification_facade::NotificationFacade,
    venue_gate::application::{
        command_services::venue_gate_command_service_impl::VenueGateCommandServiceImpl,
        query_services::venue_gate_query_service_impl::VenueGateQueryServiceImpl,
    },
};
use rust_decimal_macros::dec;

use super::{
    fakes::{
        FakeAuthorizationDecisionAuditRepository, InMemoryWorkflowStore,
        RecordingNotificationFacade,
    },
    fixtures::{
        COORDINATOR_ID, EQUIPMENT_ID, PRIZE_MONEY_ID, admin, category_catalog,
        coordinator, create_event_command, event_lead, facilities, fast_retry_policy, finance,
        line, other_coordinator, retired_finance, second_finance, venues, workshop_lead,
    },
};

pub struct WorkflowHarness {
    pub store: Arc<InMemoryWorkflowStore>,
    pub audit_repository: Arc<FakeAuthorizationDecisionAuditRepository>,
    pub notifications: Arc<RecordingNotificationFacade>,
    pub catalog: BudgetCategoryCatalog,
    pub access_control_queries: Arc<AccessControlQueryServiceImpl>,
    pub event_commands: EventCommandServiceImpl,
    pub event_queries: EventQueryServiceImpl,
    pub budget_commands: BudgetCommandServiceImpl,
    pub budget_queries: BudgetQueryServiceImpl,
    pub approval_commands: ApprovalCommandServiceImpl,
    pub approval_queries: ApprovalQueryServiceImpl,
    pub venue_commands: VenueGateCommandServiceImpl,
    pub venue_queries: VenueGateQueryServiceImpl,
}

pub fn create_workflow_harness() -> WorkflowHarness {
    let recording = Arc::new(RecordingNotificationFacade::new());
    build_harness(recording.clone(), recording)
}

/// Harness whose services publish through `facade` instead of the recorder.
pub fn create_workflow_harness_publishing_to(
    facade: Arc<dyn NotificationFacade>,
) -> WorkflowHarness {
    build_harness(Arc::new(RecordingNotificationFacade::new()), facade)
}

fn build_harness(
    notifications: Arc<RecordingNotificationFacade>,
    publisher: Arc<dyn NotificationFacade>,
) -> WorkflowHarness {
    let store = Arc::new(InMemoryWorkflowStore::new());
    store.add_principal(admin(), "Admin", true);
    store.add_principal(event_lead(), "Event Lead", true);
    store.add_principal(workshop_lead(), "Workshop Lead", true);
    store.add_principal(finance(), "Finance One", true);
    store.add_principal(second_finance(), "Finance Two", true);
    store.add_principal(retired_finance(), "Finance Retired", false);
    store.add_principal(facilities(), "Facilities", true);
    store.add_principal(coordinator(), "Coordinator", true);
    store.add_principal(other_coordinator(), "Other Coordinator", true);
    for venue in venues() {
        store.add_venue(venue);
    }

    let audit_repository = Arc::new(FakeAuthorizationDecisionAuditRepository::new());
    let catalog = category_catalog();
    let retry_policy = fast_retry_policy();

    let access_control_queries = Arc::new(AccessControlQueryServiceImpl::new(
        audit_repository.clone(),
        retry_policy,
    ));
    let access_control = Arc::new(AccessControlFacadeImpl::new(
        access_control_queries.clone(),
    ));
    let event_registry = Arc::new(EventRegistryFacadeImpl::new(store.clone(), retry_policy));

    WorkflowHarness {
        event_commands: EventCommandServiceImpl::new(
            store.clone(),
            store.clone(),
            access_control.clone(),
            publisher.clone(),
            retry_policy,
        ),
        event_queries: EventQueryServiceImpl::new(
            store.clone(),
            access_control.clone(),
            retry_policy,
        ),
        budget_commands: BudgetCommandServiceImpl::new(
            store.clone(),
            event_registry.clone(),
            access_control.clone(),
            publisher.clone(),
            catalog.clone(),
            retry_policy,
        ),
        budget_queries: BudgetQueryServiceImpl::new(
            store.clone(),
            event_registry.clone(),
            access_control.clone(),
            catalog.clone(),
            retry_policy,
        ),
        approval_commands: ApprovalCommandServiceImpl::new(
            store.clone(),
            event_registry.clone(),
            access_control.clone(),
            publisher.clone(),
            retry_policy,
        ),
        approval_queries: ApprovalQueryServiceImpl::new(
            store.clone(),
            event_registry.clone(),
            access_control.clone(),
            retry_policy,
        ),
        venue_commands: VenueGateCommandServiceImpl::new(
            store.clone(),
            store.clone(),
            event_registry.clone(),
            access_control.clone(),
            publisher.clone(),
            catalog.clone(),
            retry_policy,
        ),
        venue_queries: VenueGateQueryServiceImpl::new(
            store.clone(),
            store.clone(),
            event_registry,
            access_control,
            retry_policy,
        ),
        store,
        audit_repository,
        notifications,
        catalog,
        access_control_queries,
    }
}

impl WorkflowHarness {
    /// PENDING event created by the event lead and coordinated by `COORDINATOR_ID`.
    pub async fn pending_event(&self) -> Event {
        self.event_commands
            .handle_create(create_event_command(event_lead(), Some(COORDINATOR_ID)))
            .await
            .expect("event created")
    }

    pub async fn pending_event_with_budget(&self) -> Event {
        let event = self.pending_event().await;
        let command = SubmitBudgetCommand::new(
            event_lead(),
            event.id(),
            vec![
                line(PRIZE_MONEY_ID, dec!(15000.00), None),
                line(EQUIPMENT_ID, dec!(4200.50), Some(dec!(1000))),
            ],
        )
        .expect("valid submission");
        self.budget_commands
            .handle_submit(command)
            .await
            .expect("budget submitted");
        event
    }

    pub async fn approved_event(&self) -> Event {
        let event = self.pending_event_with_budget().await;
        self.decide(&event, "APPROVED").await;
        self.store.event(event.id()).expect("stored event")
    }

    pub async fn rejected_event(&self) -> Event {
        let event = self.pending_event_with_budget().await;
        self.decide(&event, "REJECTED").await;
        self.store.event(event.id()).expect("stored event")
    }

    async fn decide(&self, event: &Event, decision: &str) {
        let command = DecideBudgetCommand::new(
            finance(),
            event.id(),
            decision,
            "Reviewed against the semester allocation".to_string(),
        )
        .expect("valid decision");
        self.approval_commands
            .handle_decide(command)
            .await
            .expect("decision recorded");
    }
}
