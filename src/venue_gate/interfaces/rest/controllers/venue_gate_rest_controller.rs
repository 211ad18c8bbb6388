use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, put},
};
use validator::Validate;

use crate::{
    budgeting::domain::services::budget_category_catalog::BudgetCategoryCatalog,
    event_management::interfaces::rest::resources::event_resource::EventResource,
    iam_integration::interfaces::{
        acl::identity_context_facade::IdentityContextFacade,
        rest::principal_header_resolver::resolve_principal,
    },
    shared::interfaces::rest::{
        error_mapping::{RestError, map_domain_error, map_validation_error},
        path_params::parse_uuid,
        resources::error_response_resource::ErrorResponseResource,
    },
    venue_gate::{
        domain::{
            model::{
                commands::{
                    assign_venue_command::AssignVenueCommand,
                    record_expense_command::RecordExpenseCommand,
                },
                queries::list_expenses_query::ListExpensesQuery,
            },
            services::{
                venue_gate_command_service::VenueGateCommandService,
                venue_gate_query_service::VenueGateQueryService,
            },
        },
        interfaces::rest::resources::{
            assign_venue_request_resource::AssignVenueRequestResource,
            expense_resource::{ExpenseLedgerResource, ExpenseResource},
            record_expense_request_resource::RecordExpenseRequestResource,
            venue_resource::VenueResource,
        },
    },
};

#[derive(Clone)]
pub struct VenueGateRestControllerState {
    pub command_service: Arc<dyn VenueGateCommandService>,
    pub query_service: Arc<dyn VenueGateQueryService>,
    pub identity_context: Arc<dyn IdentityContextFacade>,
    pub catalog: BudgetCategoryCatalog,
}

pub fn router(state: VenueGateRestControllerState) -> Router {
    Router::new()
        .route("/events/:event_id/venue", put(assign_venue))
        .route(
            "/events/:event_id/expenses",
            get(list_expenses).post(record_expense),
        )
        .route("/venues", get(list_venues))
        .with_state(state)
}

#[utoipa::path(
    put,
    path = "/events/{event_id}/venue",
    tag = "venue-gate",
    params(("event_id" = String, Path, description = "Event identifier")),
    request_body = AssignVenueRequestResource,
    security(("principalHeader" = [])),
    responses(
        (status = 200, description = "Venue assigned", body = EventResource),
        (status = 400, description = "Venue cannot host the event", body = ErrorResponseResource),
        (status = 403, description = "Not allowed to assign venues", body = ErrorResponseResource),
        (status = 404, description = "Event or venue not found", body = ErrorResponseResource),
        (status = 409, description = "Event is not APPROVED", body = ErrorResponseResource)
    )
)]
pub async fn assign_venue(
    State(state): State<VenueGateRestControllerState>,
    headers: HeaderMap,
    Path(event_id): Path<String>,
    Json(request): Json<AssignVenueRequestResource>,
) -> Result<Json<EventResource>, RestError> {
    request.validate().map_err(map_validation_error)?;
    let principal = resolve_principal(state.identity_context.as_ref(), &headers).await?;
    let event_id = parse_uuid(&event_id, "event_id")?;
    let venue_id = parse_uuid(&request.venue_id, "venue_id")?;

    let event = state
        .command_service
        .handle_assign_venue(AssignVenueCommand::new(principal, event_id, venue_id))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(EventResource::from(event)))
}

#[utoipa::path(
    post,
    path = "/events/{event_id}/expenses",
    tag = "venue-gate",
    params(("event_id" = String, Path, description = "Event identifier")),
    request_body = RecordExpenseRequestResource,
    security(("principalHeader" = [])),
    responses(
        (status = 201, description = "Expense recorded", body = ExpenseResource),
        (status = 400, description = "Invalid expense", body = ErrorResponseResource),
        (status = 403, description = "Not allowed to record expenses", body = ErrorResponseResource),
        (status = 404, description = "Event not found", body = ErrorResponseResource),
        (status = 409, description = "Event is not APPROVED", body = ErrorResponseResource)
    )
)]
pub async fn record_expense(
    State(state): State<VenueGateRestControllerState>,
    headers: HeaderMap,
    Path(event_id): Path<String>,
    Json(request): Json<RecordExpenseRequestResource>,
) -> Result<(StatusCode, Json<ExpenseResource>), RestError> {
    request.validate().map_err(map_validation_error)?;
    let principal = resolve_principal(state.identity_context.as_ref(), &headers).await?;
    let event_id = parse_uuid(&event_id, "event_id")?;
    let category_id = parse_uuid(&request.category_id, "category_id")?;

    let command = RecordExpenseCommand::new(
        principal,
        event_id,
        category_id,
        request.item_name,
        request.amount,
    )
    .map_err(map_domain_error)?;

    let expense = state
        .command_service
        .handle_record_expense(command)
        .await
        .map_err(map_domain_error)?;

    Ok((
        StatusCode::CREATED,
        Json(ExpenseResource::from_expense(&expense, &state.catalog)),
    ))
}

#[utoipa::path(
    get,
    path = "/events/{event_id}/expenses",
    tag = "venue-gate",
    params(("event_id" = String, Path, description = "Event identifier")),
    security(("principalHeader" = [])),
    responses(
        (status = 200, description = "Recorded expenses with the running total", body = ExpenseLedgerResource),
        (status = 403, description = "Event not visible to the principal", body = ErrorResponseResource),
        (status = 404, description = "Event not found", body = ErrorResponseResource)
    )
)]
pub async fn list_expenses(
    State(state): State<VenueGateRestControllerState>,
    headers: HeaderMap,
    Path(event_id): Path<String>,
) -> Result<Json<ExpenseLedgerResource>, RestError> {
    let principal = resolve_principal(state.identity_context.as_ref(), &headers).await?;
    let event_id = parse_uuid(&event_id, "event_id")?;

    let ledger = state
        .query_service
        .handle_list_expenses(ListExpensesQuery::new(principal, event_id))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ExpenseLedgerResource::from_ledger(
        &ledger,
        &state.catalog,
    )))
}

#[utoipa::path(
    get,
    path = "/venues",
    tag = "venue-gate",
    responses(
        (status = 200, description = "Active venues", body = [VenueResource]),
        (status = 503, description = "Venue directory unavailable", body = ErrorResponseResource)
    )
)]
pub async fn list_venues(
    State(state): State<VenueGateRestControllerState>,
) -> Result<Json<Vec<VenueResource>>, RestError> {
    let venues = state
        .query_service
        .handle_list_venues()
        .await
        .map_err(map_domain_error)?;

    Ok(Json(venues.into_iter().map(VenueResource::from).collect()))
}
