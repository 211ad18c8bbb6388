use async_trait::async_trait;

use crate::{
    notifications::domain::model::{
        queries::list_inbox_query::ListInboxQuery, value_objects::inbox_view::InboxView,
    },
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

#[async_trait]
pub trait InboxQueryService: Send + Sync {
    async fn handle_list(&self, query: ListInboxQuery) -> Result<InboxView, WorkflowDomainError>;
}
