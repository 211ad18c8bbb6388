use axum::{
    Json,
    http::{HeaderMap, StatusCode},
};

use crate::{
    iam_integration::{
        domain::model::entities::principal::Principal,
        interfaces::acl::identity_context_facade::{IamIntegrationError, IdentityContextFacade},
    },
    shared::interfaces::rest::{
        error_mapping::RestError,
        openapi::security::{PRINCIPAL_HEADER, REQUEST_ID_HEADER},
        resources::error_response_resource::ErrorResponseResource,
    },
};

pub async fn resolve_principal(
    identity_context: &dyn IdentityContextFacade,
    headers: &HeaderMap,
) -> Result<Principal, RestError> {
    let subject_id = headers
        .get(PRINCIPAL_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            map_iam_error(IamIntegrationError::InvalidSubject(format!(
                "{PRINCIPAL_HEADER} header is required"
            )))
        })?;

    identity_context
        .resolve_principal(subject_id)
        .await
        .map_err(map_iam_error)
}

pub fn request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn map_iam_error(error: IamIntegrationError) -> RestError {
    let (status, code) = match error {
        IamIntegrationError::Unavailable(_) => {
            (StatusCode::SERVICE_UNAVAILABLE, "system_failure")
        }
        IamIntegrationError::InvalidSubject(_)
        | IamIntegrationError::UnknownPrincipal
        | IamIntegrationError::InactivePrincipal => (StatusCode::UNAUTHORIZED, "unauthenticated"),
    };

    (
        status,
        Json(ErrorResponseResource {
            code: code.to_string(),
            message: error.to_string(),
        }),
    )
}
