use uuid::Uuid;

use crate::iam_integration::domain::model::value_objects::principal_id::PrincipalId;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ResourceOwnership {
    resource_id: Uuid,
    creator_id: PrincipalId,
    coordinator_id: Option<PrincipalId>,
}

impl ResourceOwnership {
    pub fn new(
        resource_id: Uuid,
        creator_id: PrincipalId,
        coordinator_id: Option<PrincipalId>,
    ) -> Self {
        Self {
            resource_id,
            creator_id,
            coordinator_id,
        }
    }

    pub fn resource_id(&self) -> Uuid {
        self.resource_id
    }

    pub fn creator_id(&self) -> PrincipalId {
        self.creator_id
    }

    pub fn coordinator_id(&self) -> Option<PrincipalId> {
        self.coordinator_id
    }

    pub fn is_created_by(&self, principal_id: PrincipalId) -> bool {
        self.creator_id == principal_id
    }

    pub fn is_coordinated_by(&self, principal_id: PrincipalId) -> bool {
        self.coordinator_id == Some(principal_id)
    }
}
