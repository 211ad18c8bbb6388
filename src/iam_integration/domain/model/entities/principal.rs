use crate::iam_integration::domain::model::{
    enums::principal_role::PrincipalRole, value_objects::principal_id::PrincipalId,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Principal {
    id: PrincipalId,
    role: PrincipalRole,
}

impl Principal {
    pub fn new(id: PrincipalId, role: PrincipalRole) -> Self {
        Self { id, role }
    }

    pub fn id(&self) -> PrincipalId {
        self.id
    }

    pub fn role(&self) -> PrincipalRole {
        self.role
    }
}
