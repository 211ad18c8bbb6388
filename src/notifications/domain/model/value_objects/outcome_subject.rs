use uuid::Uuid;

use crate::iam_integration::domain::model::value_objects::principal_id::PrincipalId;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OutcomeSubject {
    pub event_id: Uuid,
    pub event_name: String,
    pub creator_id: PrincipalId,
    pub coordinator_id: Option<PrincipalId>,
}
