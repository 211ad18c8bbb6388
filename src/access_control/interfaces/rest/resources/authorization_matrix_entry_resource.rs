use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::access_control::domain::{
    model::enums::permission_effect::PermissionEffect,
    services::authorization_matrix::MatrixEntry,
};

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct AuthorizationMatrixEntryResource {
    pub role: String,
    pub action: String,
    pub effect: String,
    pub scope: Option<String>,
}

impl From<MatrixEntry> for AuthorizationMatrixEntryResource {
    fn from(entry: MatrixEntry) -> Self {
        let effect = if entry.scope.is_some() {
            PermissionEffect::Allow
        } else {
            PermissionEffect::Deny
        };

        Self {
            role: entry.role.as_str().to_string(),
            action: entry.action.as_str().to_string(),
            effect: effect.as_str().to_string(),
            scope: entry.scope.map(|s| s.as_str().to_string()),
        }
    }
}
