//! Static role × action capability table.
//!
//! Every `(role, action)` pair resolves to exactly one outcome: a grant with
//! a [`GrantScope`] or an implicit deny. Administrators hold every action
//! with [`GrantScope::Any`].

use crate::{
    access_control::{
        domain::{
            model::{
                enums::{capability_action::CapabilityAction, grant_scope::GrantScope},
                value_objects::resource_ownership::ResourceOwnership,
            },
            services::access_control_query_service::AuthorizationDecisionResult,
        },
    },
    iam_integration::domain::model::{entities::principal::Principal, enums::principal_role::PrincipalRole},
};

use CapabilityAction::*;
use PrincipalRole::*;

struct CapabilityGrant {
    role: PrincipalRole,
    action: CapabilityAction,
    scope: GrantScope,
}

const fn grant(role: PrincipalRole, action: CapabilityAction, scope: GrantScope) -> CapabilityGrant {
    CapabilityGrant {
        role,
        action,
        scope,
    }
}

const GRANTS: &[CapabilityGrant] = &[
    grant(EventTeamLead, CreateEvent, GrantScope::Any),
    grant(EventTeamLead, UpdateEvent, GrantScope::Owned),
    grant(EventTeamLead, SubmitBudget, GrantScope::Owned),
    grant(EventTeamLead, RecordExpense, GrantScope::Owned),
    grant(EventTeamLead, ViewEvent, GrantScope::Owned),
    grant(WorkshopTeamLead, CreateEvent, GrantScope::Any),
    grant(WorkshopTeamLead, UpdateEvent, GrantScope::Owned),
    grant(WorkshopTeamLead, SubmitBudget, GrantScope::Owned),
    grant(WorkshopTeamLead, RecordExpense, GrantScope::Owned),
    grant(WorkshopTeamLead, ViewEvent, GrantScope::Owned),
    grant(FinanceTeam, ReviewBudget, GrantScope::Any),
    grant(FinanceTeam, RecordExpense, GrantScope::Any),
    grant(FinanceTeam, ViewEvent, GrantScope::Any),
    grant(FacilitiesTeam, AssignVenue, GrantScope::Any),
    grant(FacilitiesTeam, ViewEvent, GrantScope::Any),
    grant(EventCoordinator, ViewEvent, GrantScope::Coordinated),
    grant(WorkshopCoordinator, ViewEvent, GrantScope::Coordinated),
];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MatrixEntry {
    pub role: PrincipalRole,
    pub action: CapabilityAction,
    pub scope: Option<GrantScope>,
}

pub struct AuthorizationMatrix;

impl AuthorizationMatrix {
    pub fn grant_scope(role: PrincipalRole, action: CapabilityAction) -> Option<GrantScope> {
        if role == Administrator {
            return Some(GrantScope::Any);
        }

        GRANTS
            .iter()
            .find(|g| g.role == role && g.action == action)
            .map(|g| g.scope)
    }

    pub fn authorize(
        principal: &Principal,
        action: CapabilityAction,
        ownership: Option<&ResourceOwnership>,
    ) -> AuthorizationDecisionResult {
        if principal.role() == Administrator {
            return AuthorizationDecisionResult::allow("administrator override");
        }

        let Some(scope) = Self::grant_scope(principal.role(), action) else {
            return AuthorizationDecisionResult::deny(format!(
                "role {} is not granted {}",
                principal.role(),
                action
            ));
        };

        match (scope, ownership) {
            (GrantScope::Any, _) => AuthorizationDecisionResult::allow(format!(
                "role {} is granted {}",
                principal.role(),
                action
            )),
            (_, None) => AuthorizationDecisionResult::deny(format!(
                "{action} for role {} requires a resource",
                principal.role()
            )),
            (GrantScope::Owned, Some(resource)) => {
                if resource.is_created_by(principal.id()) {
                    AuthorizationDecisionResult::allow("principal created the resource")
                } else {
                    AuthorizationDecisionResult::deny("resource was created by another principal")
                }
            }
            (GrantScope::Coordinated, Some(resource)) => {
                if resource.is_coordinated_by(principal.id()) {
                    AuthorizationDecisionResult::allow("principal coordinates the resource")
                } else {
                    AuthorizationDecisionResult::deny("resource is not coordinated by principal")
                }
            }
        }
    }

    pub fn entries() -> Vec<MatrixEntry> {
        PrincipalRole::ALL
            .into_iter()
            .flat_map(|role| {
                CapabilityAction::ALL.into_iter().map(move |action| MatrixEntry {
                    role,
                    action,
                    scope: Self::grant_scope(role, action),
                })
            })
            .collect()
    }
}
