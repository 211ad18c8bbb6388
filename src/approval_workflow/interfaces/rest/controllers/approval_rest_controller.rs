use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use validator::Validate;

use crate::{
    approval_workflow::{
        domain::{
            model::{
                commands::{
                    decide_budget_command::DecideBudgetCommand,
                    resubmit_budget_command::ResubmitBudgetCommand,
                },
                queries::list_approval_history_query::ListApprovalHistoryQuery,
            },
            services::{
                approval_command_service::ApprovalCommandService,
                approval_query_service::ApprovalQueryService,
            },
        },
        interfaces::rest::resources::{
            approval_record_resource::ApprovalRecordResource,
            decide_budget_request_resource::{
                DecideBudgetRequestResource, ResubmitBudgetRequestResource,
            },
        },
    },
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
};

#[derive(Clone)]
pub struct ApprovalRestControllerState {
    pub command_service: Arc<dyn ApprovalCommandService>,
    pub query_service: Arc<dyn ApprovalQueryService>,
    pub identity_context: Arc<dyn IdentityContextFacade>,
}

pub fn router(state: ApprovalRestControllerState) -> Router {
    Router::new()
        .route("/events/:event_id/decision", post(decide_budget))
        .route("/events/:event_id/resubmit", post(resubmit_budget))
        .route("/events/:event_id/approvals", get(list_approval_history))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/events/{event_id}/decision",
    tag = "approval-workflow",
    params(("event_id" = String, Path, description = "Event identifier")),
    request_body = DecideBudgetRequestResource,
    security(("principalHeader" = [])),
    responses(
        (status = 201, description = "Decision recorded", body = ApprovalRecordResource),
        (status = 400, description = "Missing remarks or unknown decision", body = ErrorResponseResource),
        (status = 403, description = "Not allowed to review budgets", body = ErrorResponseResource),
        (status = 404, description = "Event not found", body = ErrorResponseResource),
        (status = 409, description = "Event was already decided", body = ErrorResponseResource)
    )
)]
pub async fn decide_budget(
    State(state): State<ApprovalRestControllerState>,
    headers: HeaderMap,
    Path(event_id): Path<String>,
    Json(request): Json<DecideBudgetRequestResource>,
) -> Result<(StatusCode, Json<ApprovalRecordResource>), RestError> {
    request.validate().map_err(map_validation_error)?;
    let principal = resolve_principal(state.identity_context.as_ref(), &headers).await?;
    let event_id = parse_uuid(&event_id, "event_id")?;

    let command = DecideBudgetCommand::new(principal, event_id, &request.decision, request.remarks)
        .map_err(map_domain_error)?;

    let record = state
        .command_service
        .handle_decide(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(ApprovalRecordResource::from(record))))
}

#[utoipa::path(
    post,
    path = "/events/{event_id}/resubmit",
    tag = "approval-workflow",
    params(("event_id" = String, Path, description = "Event identifier")),
    request_body = ResubmitBudgetRequestResource,
    security(("principalHeader" = [])),
    responses(
        (status = 200, description = "Event reopened for review in a new cycle", body = EventResource),
        (status = 403, description = "Not the event owner", body = ErrorResponseResource),
        (status = 404, description = "Event not found", body = ErrorResponseResource),
        (status = 409, description = "Event is not REJECTED", body = ErrorResponseResource)
    )
)]
pub async fn resubmit_budget(
    State(state): State<ApprovalRestControllerState>,
    headers: HeaderMap,
    Path(event_id): Path<String>,
    Json(request): Json<ResubmitBudgetRequestResource>,
) -> Result<Json<EventResource>, RestError> {
    request.validate().map_err(map_validation_error)?;
    let principal = resolve_principal(state.identity_context.as_ref(), &headers).await?;
    let event_id = parse_uuid(&event_id, "event_id")?;

    let command =
        ResubmitBudgetCommand::new(principal, event_id, request.note).map_err(map_domain_error)?;

    let event = state
        .command_service
        .handle_resubmit(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(EventResource::from(event)))
}

#[utoipa::path(
    get,
    path = "/events/{event_id}/approvals",
    tag = "approval-workflow",
    params(("event_id" = String, Path, description = "Event identifier")),
    security(("principalHeader" = [])),
    responses(
        (status = 200, description = "Decisions in the order they were recorded", body = [ApprovalRecordResource]),
        (status = 403, description = "Event not visible to the principal", body = ErrorResponseResource),
        (status = 404, description = "Event not found", body = ErrorResponseResource)
    )
)]
pub async fn list_approval_history(
    State(state): State<ApprovalRestControllerState>,
    headers: HeaderMap,
    Path(event_id): Path<String>,
) -> Result<Json<Vec<ApprovalRecordResource>>, RestError> {
    let principal = resolve_principal(state.identity_context.as_ref(), &headers).await?;
    let event_id = parse_uuid(&event_id, "event_id")?;

    let records = state
        .query_service
        .handle_list_history(ListApprovalHistoryQuery::new(principal, event_id))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        records.into_iter().map(ApprovalRecordResource::from).collect(),
    ))
}
