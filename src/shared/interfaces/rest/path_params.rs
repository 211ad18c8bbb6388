use uuid::Uuid;

use crate::shared::{
    domain::model::enums::workflow_domain_error::WorkflowDomainError,
    interfaces::rest::error_mapping::{RestError, map_domain_error},
};

pub fn parse_uuid(raw: &str, label: &str) -> Result<Uuid, RestError> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        map_domain_error(WorkflowDomainError::InvalidInput(format!(
            "{label} must be a valid UUID"
        )))
    })
}
