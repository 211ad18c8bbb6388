use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::approval_workflow::domain::model::entities::approval_record::ApprovalRecord;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ApprovalRecordResource {
    pub id: String,
    pub event_id: String,
    pub reviewer_id: String,
    pub decision: String,
    pub remarks: String,
    pub review_cycle: i32,
    pub created_at: String,
}

impl From<ApprovalRecord> for ApprovalRecordResource {
    fn from(record: ApprovalRecord) -> Self {
        Self {
            id: record.id().to_string(),
            event_id: record.event_id().to_string(),
            reviewer_id: record.reviewer_id().as_string(),
            decision: record.decision().as_str().to_string(),
            remarks: record.remarks().value().to_string(),
            review_cycle: record.review_cycle(),
            created_at: record.created_at().to_rfc3339(),
        }
    }
}
