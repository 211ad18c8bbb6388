use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::HeaderMap,
    routing::get,
};
use validator::Validate;

use crate::{
    budgeting::{
        domain::{
            model::{
                commands::submit_budget_command::SubmitBudgetCommand,
                queries::get_budget_query::GetBudgetQuery,
                value_objects::budget_line_draft::BudgetLineDraft,
            },
            services::{
                budget_category_catalog::BudgetCategoryCatalog,
                budget_command_service::BudgetCommandService,
                budget_query_service::BudgetQueryService,
            },
        },
        interfaces::rest::resources::{
            budget_category_resource::BudgetCategoryResource,
            budget_line_resource::{BudgetLineResource, BudgetSummaryResource},
            submit_budget_request_resource::SubmitBudgetRequestResource,
        },
    },
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
pub struct BudgetRestControllerState {
    pub command_service: Arc<dyn BudgetCommandService>,
    pub query_service: Arc<dyn BudgetQueryService>,
    pub identity_context: Arc<dyn IdentityContextFacade>,
    pub catalog: BudgetCategoryCatalog,
}

pub fn router(state: BudgetRestControllerState) -> Router {
    Router::new()
        .route(
            "/events/:event_id/budget",
            get(get_budget).post(submit_budget),
        )
        .route("/budget-categories", get(list_budget_categories))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/events/{event_id}/budget",
    tag = "budgeting",
    params(("event_id" = String, Path, description = "Event identifier")),
    request_body = SubmitBudgetRequestResource,
    security(("principalHeader" = [])),
    responses(
        (status = 200, description = "Lines stored for the submitted categories", body = [BudgetLineResource]),
        (status = 400, description = "Invalid lines", body = ErrorResponseResource),
        (status = 403, description = "Not the event owner", body = ErrorResponseResource),
        (status = 404, description = "Event not found", body = ErrorResponseResource),
        (status = 409, description = "Event is no longer PENDING", body = ErrorResponseResource)
    )
)]
pub async fn submit_budget(
    State(state): State<BudgetRestControllerState>,
    headers: HeaderMap,
    Path(event_id): Path<String>,
    Json(request): Json<SubmitBudgetRequestResource>,
) -> Result<Json<Vec<BudgetLineResource>>, RestError> {
    request.validate().map_err(map_validation_error)?;
    let principal = resolve_principal(state.identity_context.as_ref(), &headers).await?;
    let event_id = parse_uuid(&event_id, "event_id")?;

    let mut drafts = Vec::with_capacity(request.lines.len());
    for line in request.lines {
        let category_id = parse_uuid(&line.category_id, "category_id")?;
        drafts.push(
            BudgetLineDraft::new(
                category_id,
                line.amount,
                line.sponsor_contribution,
                line.remarks,
            )
            .map_err(map_domain_error)?,
        );
    }

    let command =
        SubmitBudgetCommand::new(principal, event_id, drafts).map_err(map_domain_error)?;

    let lines = state
        .command_service
        .handle_submit(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(
        lines
            .iter()
            .map(|line| BudgetLineResource::from_line(line, &state.catalog))
            .collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/events/{event_id}/budget",
    tag = "budgeting",
    params(("event_id" = String, Path, description = "Event identifier")),
    security(("principalHeader" = [])),
    responses(
        (status = 200, description = "Budget lines with derived totals", body = BudgetSummaryResource),
        (status = 403, description = "Event not visible to the principal", body = ErrorResponseResource),
        (status = 404, description = "Event not found", body = ErrorResponseResource)
    )
)]
pub async fn get_budget(
    State(state): State<BudgetRestControllerState>,
    headers: HeaderMap,
    Path(event_id): Path<String>,
) -> Result<Json<BudgetSummaryResource>, RestError> {
    let principal = resolve_principal(state.identity_context.as_ref(), &headers).await?;
    let event_id = parse_uuid(&event_id, "event_id")?;

    let summary = state
        .query_service
        .handle_get_summary(GetBudgetQuery::new(principal, event_id))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(BudgetSummaryResource::from_summary(
        &summary,
        &state.catalog,
    )))
}

#[utoipa::path(
    get,
    path = "/budget-categories",
    tag = "budgeting",
    responses(
        (status = 200, description = "Budget categories in display order", body = [BudgetCategoryResource])
    )
)]
pub async fn list_budget_categories(
    State(state): State<BudgetRestControllerState>,
) -> Json<Vec<BudgetCategoryResource>> {
    Json(
        state
            .query_service
            .list_categories()
            .into_iter()
            .map(BudgetCategoryResource::from)
            .collect(),
    )
}
