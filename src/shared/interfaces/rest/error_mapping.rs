use axum::{Json, http::StatusCode};
use validator::ValidationErrors;

use crate::shared::{
    domain::model::enums::workflow_domain_error::WorkflowDomainError,
    interfaces::rest::resources::error_response_resource::ErrorResponseResource,
};

pub type RestError = (StatusCode, Json<ErrorResponseResource>);

pub fn map_domain_error(error: WorkflowDomainError) -> RestError {
    let status = match error {
        WorkflowDomainError::Unauthorized(_) => StatusCode::FORBIDDEN,
        WorkflowDomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        WorkflowDomainError::NotFound(_) => StatusCode::NOT_FOUND,
        WorkflowDomainError::InvalidState(_) | WorkflowDomainError::AlreadyDecided => {
            StatusCode::CONFLICT
        }
        WorkflowDomainError::SystemFailure(_) => StatusCode::SERVICE_UNAVAILABLE,
    };

    if status == StatusCode::SERVICE_UNAVAILABLE {
        tracing::error!(error = %error, "request failed with system failure");
    }

    (
        status,
        Json(ErrorResponseResource {
            code: error.code().to_string(),
            message: error.to_string(),
        }),
    )
}

pub fn map_validation_error(error: ValidationErrors) -> RestError {
    map_domain_error(WorkflowDomainError::InvalidInput(error.to_string()))
}
