use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{
    access_control::domain::model::enums::{
        capability_action::CapabilityAction, grant_scope::GrantScope,
        permission_effect::PermissionEffect,
    },
    iam_integration::domain::model::{
        enums::principal_role::PrincipalRole, value_objects::principal_id::PrincipalId,
    },
};

/// One evaluated permission check. `grant_scope` is the matrix scope the role
/// holds for the action, present even when ownership made the check fail.
#[derive(Clone, Debug)]
pub struct AuthorizationDecisionAuditedEvent {
    pub principal_id: PrincipalId,
    pub role: PrincipalRole,
    pub action: CapabilityAction,
    pub grant_scope: Option<GrantScope>,
    pub event_id: Option<Uuid>,
    pub event_creator_id: Option<PrincipalId>,
    pub request_id: Option<String>,
    pub effect: PermissionEffect,
    pub reason: String,
    pub decided_at: DateTime<Utc>,
}
