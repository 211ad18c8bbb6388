use crate::{
    access_control::domain::{
        model::enums::{capability_action::CapabilityAction, grant_scope::GrantScope},
        services::authorization_matrix::AuthorizationMatrix,
    },
    iam_integration::domain::model::{
        entities::principal::Principal, value_objects::principal_id::PrincipalId,
    },
};

/// Which events a principal may list, derived from its `ViewEvent` grant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EventVisibility {
    All,
    CreatedBy(PrincipalId),
    CoordinatedBy(PrincipalId),
    Nothing,
}

impl EventVisibility {
    pub fn for_principal(principal: &Principal) -> Self {
        match AuthorizationMatrix::grant_scope(principal.role(), CapabilityAction::ViewEvent) {
            Some(GrantScope::Any) => Self::All,
            Some(GrantScope::Owned) => Self::CreatedBy(principal.id()),
            Some(GrantScope::Coordinated) => Self::CoordinatedBy(principal.id()),
            None => Self::Nothing,
        }
    }
}
