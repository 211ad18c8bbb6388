use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    access_control::{
        domain::model::enums::capability_action::CapabilityAction,
        interfaces::acl::access_control_facade::{
            AccessControlFacade, AccessControlPermissionRequest, require_permission,
        },
    },
    approval_workflow::{
        domain::{
            model::{
                entities::approval_record::ApprovalRecord,
                queries::list_approval_history_query::ListApprovalHistoryQuery,
            },
            services::approval_query_service::ApprovalQueryService,
        },
        infrastructure::persistence::repositories::approval_record_repository::ApprovalRecordRepository,
    },
    event_management::interfaces::acl::event_registry_facade::EventRegistryFacade,
    shared::{
        application::retry_policy::RetryPolicy,
        domain::model::enums::workflow_domain_error::WorkflowDomainError,
    },
};

pub struct ApprovalQueryServiceImpl {
    approval_record_repository: Arc<dyn ApprovalRecordRepository>,
    event_registry: Arc<dyn EventRegistryFacade>,
    access_control: Arc<dyn AccessControlFacade>,
    retry_policy: RetryPolicy,
}

impl ApprovalQueryServiceImpl {
    pub fn new(
        approval_record_repository: Arc<dyn ApprovalRecordRepository>,
        event_registry: Arc<dyn EventRegistryFacade>,
        access_control: Arc<dyn AccessControlFacade>,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            approval_record_repository,
            event_registry,
            access_control,
            retry_policy,
        }
    }
}

#[async_trait]
impl ApprovalQueryService for ApprovalQueryServiceImpl {
    async fn handle_list_history(
        &self,
        query: ListApprovalHistoryQuery,
    ) -> Result<Vec<ApprovalRecord>, WorkflowDomainError> {
        let event = self.event_registry.load_event(query.event_id()).await?;

        require_permission(
            self.access_control.as_ref(),
            AccessControlPermissionRequest::new(*query.principal(), CapabilityAction::ViewEvent)
                .on_resource(event.ownership()),
        )
        .await?;

        self.retry_policy
            .run("approval_records.list_by_event", || {
                self.approval_record_repository.list_by_event(event.id())
            })
            .await
    }
}
