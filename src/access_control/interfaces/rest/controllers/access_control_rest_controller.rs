use std::{str::FromStr, sync::Arc};

use axum::{
    Json, Router,
    extract::State,
    http::HeaderMap,
    routing::{get, post},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    access_control::{
        domain::{
            model::{
                enums::{
                    access_control_domain_error::AccessControlDomainError,
                    capability_action::CapabilityAction,
                },
                queries::evaluate_permission_query::EvaluatePermissionQuery,
                value_objects::resource_ownership::ResourceOwnership,
            },
            services::{
                access_control_query_service::AccessControlQueryService,
                authorization_matrix::AuthorizationMatrix,
            },
        },
        interfaces::rest::resources::{
            authorization_matrix_entry_resource::AuthorizationMatrixEntryResource,
            evaluate_permission_request_resource::{
                EvaluatePermissionRequestResource, EvaluatePermissionResponseResource,
            },
        },
    },
    iam_integration::{
        domain::model::value_objects::principal_id::PrincipalId,
        interfaces::{
            acl::identity_context_facade::IdentityContextFacade,
            rest::principal_header_resolver::{request_id, resolve_principal},
        },
    },
    shared::{
        domain::model::enums::workflow_domain_error::WorkflowDomainError,
        interfaces::rest::{
            error_mapping::{RestError, map_domain_error, map_validation_error},
            resources::error_response_resource::ErrorResponseResource,
        },
    },
};

#[derive(Clone)]
pub struct AccessControlRestControllerState {
    pub query_service: Arc<dyn AccessControlQueryService>,
    pub identity_context: Arc<dyn IdentityContextFacade>,
}

pub fn router(state: AccessControlRestControllerState) -> Router {
    Router::new()
        .route(
            "/access-control/permissions/evaluate",
            post(evaluate_permission),
        )
        .route("/access-control/matrix", get(list_authorization_matrix))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/access-control/permissions/evaluate",
    tag = "access-control",
    request_body = EvaluatePermissionRequestResource,
    params(
        ("x-request-id" = Option<String>, Header, description = "Optional correlation id")
    ),
    security(("principalHeader" = [])),
    responses(
        (status = 200, description = "Authorization decision", body = EvaluatePermissionResponseResource),
        (status = 400, description = "Invalid request", body = ErrorResponseResource),
        (status = 401, description = "Unknown principal", body = ErrorResponseResource)
    )
)]
pub async fn evaluate_permission(
    State(state): State<AccessControlRestControllerState>,
    headers: HeaderMap,
    Json(request): Json<EvaluatePermissionRequestResource>,
) -> Result<Json<EvaluatePermissionResponseResource>, RestError> {
    request.validate().map_err(map_validation_error)?;
    let principal = resolve_principal(state.identity_context.as_ref(), &headers).await?;

    let action = CapabilityAction::from_str(&request.action)
        .map_err(|e| map_domain_error(e.into()))?;
    let ownership = parse_ownership(&request).map_err(|e| map_domain_error(e.into()))?;

    let query = EvaluatePermissionQuery::new(principal, action, ownership, request_id(&headers));

    let decision = state
        .query_service
        .handle_evaluate_permission(query)
        .await
        .map_err(|e| map_domain_error(WorkflowDomainError::from(e)))?;

    Ok(Json(EvaluatePermissionResponseResource {
        allowed: decision.allowed(),
        effect: decision.effect.as_str().to_string(),
        reason: decision.reason,
    }))
}

#[utoipa::path(
    get,
    path = "/access-control/matrix",
    tag = "access-control",
    responses(
        (status = 200, description = "Every role and action pair with its outcome", body = [AuthorizationMatrixEntryResource])
    )
)]
pub async fn list_authorization_matrix() -> Json<Vec<AuthorizationMatrixEntryResource>> {
    Json(
        AuthorizationMatrix::entries()
            .into_iter()
            .map(AuthorizationMatrixEntryResource::from)
            .collect(),
    )
}

fn parse_ownership(
    request: &EvaluatePermissionRequestResource,
) -> Result<Option<ResourceOwnership>, AccessControlDomainError> {
    let Some(creator_raw) = request.creator_id.as_deref() else {
        return Ok(None);
    };

    let creator_id =
        PrincipalId::new(creator_raw).map_err(|_| AccessControlDomainError::InvalidResourceOwner)?;
    let coordinator_id = request
        .coordinator_id
        .as_deref()
        .map(PrincipalId::new)
        .transpose()
        .map_err(|_| AccessControlDomainError::InvalidResourceOwner)?;
    let resource_id = request
        .resource_id
        .as_deref()
        .map(|raw| Uuid::parse_str(raw.trim()))
        .transpose()
        .map_err(|_| AccessControlDomainError::InvalidResourceOwner)?
        .unwrap_or_else(Uuid::nil);

    Ok(Some(ResourceOwnership::new(
        resource_id,
        creator_id,
        coordinator_id,
    )))
}
