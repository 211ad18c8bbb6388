use axum::Router;
use dotenvy::dotenv;
use event_budget_workflow::{
    access_control::{
        build_access_control_facade, build_access_control_query_service,
        build_access_control_router,
        interfaces::rest::resources::{
            authorization_matrix_entry_resource::AuthorizationMatrixEntryResource,
            evaluate_permission_request_resource::{
                EvaluatePermissionRequestResource, EvaluatePermissionResponseResource,
            },
        },
    },
    approval_workflow::{
        build_approval_workflow_router,
        interfaces::rest::resources::{
            approval_record_resource::ApprovalRecordResource,
            decide_budget_request_resource::{
                DecideBudgetRequestResource, ResubmitBudgetRequestResource,
            },
        },
    },
    budgeting::{
        build_budgeting_router,
        interfaces::rest::resources::{
            budget_category_resource::BudgetCategoryResource,
            budget_line_resource::{BudgetLineResource, BudgetSummaryResource},
            submit_budget_request_resource::{
                BudgetLineRequestResource, SubmitBudgetRequestResource,
            },
        },
        load_budget_category_catalog,
    },
    config::app_config::AppConfig,
    event_management::{
        build_event_management_router, build_event_registry,
        interfaces::rest::resources::{
            create_event_request_resource::{CreateEventRequestResource, ListEventsQueryResource},
            event_resource::EventResource,
            update_event_request_resource::UpdateEventRequestResource,
        },
    },
    iam_integration::{build_identity_context, build_principal_directory},
    notifications::{
        build_notification_pipeline, build_notifications_router,
        interfaces::rest::resources::inbox_notification_resource::{
            InboxNotificationResource, InboxResource, ListInboxQueryResource,
            MarkAllReadResponseResource,
        },
    },
    shared::{
        infrastructure::persistence::postgres_pool::connect_and_migrate,
        interfaces::rest::{
            openapi::security::PrincipalHeaderSecurityAddon,
            resources::error_response_resource::ErrorResponseResource,
        },
    },
    venue_gate::{
        build_venue_gate_router,
        interfaces::rest::resources::{
            assign_venue_request_resource::AssignVenueRequestResource,
            expense_resource::{ExpenseLedgerResource, ExpenseResource},
            record_expense_request_resource::RecordExpenseRequestResource,
            venue_resource::VenueResource,
        },
    },
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        event_budget_workflow::event_management::interfaces::rest::controllers::event_rest_controller::create_event,
        event_budget_workflow::event_management::interfaces::rest::controllers::event_rest_controller::list_events,
        event_budget_workflow::event_management::interfaces::rest::controllers::event_rest_controller::get_event,
        event_budget_workflow::event_management::interfaces::rest::controllers::event_rest_controller::update_event,
        event_budget_workflow::event_management::interfaces::rest::controllers::event_rest_controller::complete_event,
        event_budget_workflow::budgeting::interfaces::rest::controllers::budget_rest_controller::submit_budget,
        event_budget_workflow::budgeting::interfaces::rest::controllers::budget_rest_controller::get_budget,
        event_budget_workflow::budgeting::interfaces::rest::controllers::budget_rest_controller::list_budget_categories,
        event_budget_workflow::approval_workflow::interfaces::rest::controllers::approval_rest_controller::decide_budget,
        event_budget_workflow::approval_workflow::interfaces::rest::controllers::approval_rest_controller::resubmit_budget,
        event_budget_workflow::approval_workflow::interfaces::rest::controllers::approval_rest_controller::list_approval_history,
        event_budget_workflow::venue_gate::interfaces::rest::controllers::venue_gate_rest_controller::assign_venue,
        event_budget_workflow::venue_gate::interfaces::rest::controllers::venue_gate_rest_controller::record_expense,
        event_budget_workflow::venue_gate::interfaces::rest::controllers::venue_gate_rest_controller::list_expenses,
        event_budget_workflow::venue_gate::interfaces::rest::controllers::venue_gate_rest_controller::list_venues,
        event_budget_workflow::notifications::interfaces::rest::controllers::inbox_rest_controller::list_notifications,
        event_budget_workflow::notifications::interfaces::rest::controllers::inbox_rest_controller::mark_notification_read,
        event_budget_workflow::notifications::interfaces::rest::controllers::inbox_rest_controller::mark_all_notifications_read,
        event_budget_workflow::access_control::interfaces::rest::controllers::access_control_rest_controller::evaluate_permission,
        event_budget_workflow::access_control::interfaces::rest::controllers::access_control_rest_controller::list_authorization_matrix
    ),
    components(
        schemas(
            CreateEventRequestResource,
            ListEventsQueryResource,
            EventResource,
            UpdateEventRequestResource,
            SubmitBudgetRequestResource,
            BudgetLineRequestResource,
            BudgetLineResource,
            BudgetSummaryResource,
            BudgetCategoryResource,
            DecideBudgetRequestResource,
            ResubmitBudgetRequestResource,
            ApprovalRecordResource,
            AssignVenueRequestResource,
            RecordExpenseRequestResource,
            ExpenseResource,
            ExpenseLedgerResource,
            VenueResource,
            InboxNotificationResource,
            InboxResource,
            ListInboxQueryResource,
            MarkAllReadResponseResource,
            EvaluatePermissionRequestResource,
            EvaluatePermissionResponseResource,
            AuthorizationMatrixEntryResource,
            ErrorResponseResource
        )
    ),
    tags(
        (name = "events", description = "Event registration and lifecycle bounded context"),
        (name = "budgeting", description = "Per-category budget lines bounded context"),
        (name = "approval-workflow", description = "Finance review and resubmission bounded context"),
        (name = "venue-gate", description = "Venue assignment and expense tracking for approved events"),
        (name = "notifications", description = "Per-principal inbox of workflow notifications"),
        (name = "access-control", description = "Role and ownership authorization bounded context")
    ),
    modifiers(&PrincipalHeaderSecurityAddon)
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = AppConfig::from_env();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter.clone())),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let pool = connect_and_migrate(&config)
        .await
        .expect("failed to prepare database");

    let directory_repository = build_principal_directory(pool.clone());
    let identity_context = build_identity_context(directory_repository.clone(), &config);

    let access_control_query_service = build_access_control_query_service(pool.clone(), &config);
    let access_control = build_access_control_facade(access_control_query_service.clone());

    let (notifications, delivery_worker) =
        build_notification_pipeline(pool.clone(), directory_repository.clone(), &config);
    delivery_worker.spawn();

    let event_registry = build_event_registry(pool.clone(), &config);
    let catalog = load_budget_category_catalog(pool.clone(), &config)
        .await
        .expect("failed to load budget categories");

    let event_router = build_event_management_router(
        pool.clone(),
        &config,
        directory_repository,
        access_control.clone(),
        notifications.clone(),
        identity_context.clone(),
    );
    let budgeting_router = build_budgeting_router(
        pool.clone(),
        &config,
        catalog.clone(),
        event_registry.clone(),
        access_control.clone(),
        notifications.clone(),
        identity_context.clone(),
    );
    let approval_router = build_approval_workflow_router(
        pool.clone(),
        &config,
        event_registry.clone(),
        access_control.clone(),
        notifications.clone(),
        identity_context.clone(),
    );
    let notifications_router =
        build_notifications_router(pool.clone(), &config, identity_context.clone());
    let venue_gate_router = build_venue_gate_router(
        pool,
        &config,
        catalog,
        event_registry,
        access_control,
        notifications,
        identity_context.clone(),
    );
    let access_control_router =
        build_access_control_router(access_control_query_service, identity_context);

    let app = Router::new()
        .merge(event_router)
        .merge(budgeting_router)
        .merge(approval_router)
        .merge(venue_gate_router)
        .merge(notifications_router)
        .merge(access_control_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(port = config.port, "server listening");
    tracing::info!(
        "swagger ui available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
