use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    notifications::{
        domain::{
            model::{
                queries::list_inbox_query::ListInboxQuery, value_objects::inbox_view::InboxView,
            },
            services::inbox_query_service::InboxQueryService,
        },
        infrastructure::persistence::repositories::inbox_repository::InboxRepository,
    },
    shared::{
        application::retry_policy::RetryPolicy,
        domain::model::enums::workflow_domain_error::WorkflowDomainError,
    },
};

pub struct InboxQueryServiceImpl {
    inbox_repository: Arc<dyn InboxRepository>,
    retry_policy: RetryPolicy,
}

impl InboxQueryServiceImpl {
    pub fn new(inbox_repository: Arc<dyn InboxRepository>, retry_policy: RetryPolicy) -> Self {
        Self {
            inbox_repository,
            retry_policy,
        }
    }
}

#[async_trait]
impl InboxQueryService for InboxQueryServiceImpl {
    async fn handle_list(&self, query: ListInboxQuery) -> Result<InboxView, WorkflowDomainError> {
        let recipient_id = query.principal().id();
        let unread_only = query.unread_only();

        let notifications = self
            .retry_policy
            .run("notifications.list_for_recipient", || {
                self.inbox_repository
                    .list_for_recipient(recipient_id, unread_only)
            })
            .await?;
        let unread_count = self
            .retry_policy
            .run("notifications.count_unread", || {
                self.inbox_repository.count_unread(recipient_id)
            })
            .await?;

        Ok(InboxView {
            notifications,
            unread_count,
        })
    }
}
