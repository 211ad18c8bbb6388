use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    access_control::interfaces::acl::access_control_facade::AccessControlFacade,
    approval_workflow::{
        application::{
            command_services::approval_command_service_impl::ApprovalCommandServiceImpl,
            query_services::approval_query_service_impl::ApprovalQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::sqlx_approval_record_repository_impl::SqlxApprovalRecordRepositoryImpl,
        interfaces::rest::controllers::approval_rest_controller::{
            ApprovalRestControllerState, router,
        },
    },
    config::app_config::AppConfig,
    event_management::interfaces::acl::event_registry_facade::EventRegistryFacade,
    iam_integration::interfaces::acl::identity_context_facade::IdentityContextFacade,
    notifications::interfaces::acl::notification_facade::NotificationFacade,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_approval_workflow_router(
    pool: PgPool,
    config: &AppConfig,
    event_registry: Arc<dyn EventRegistryFacade>,
    access_control: Arc<dyn AccessControlFacade>,
    notifications: Arc<dyn NotificationFacade>,
    identity_context: Arc<dyn IdentityContextFacade>,
) -> Router {
    let approval_record_repository = Arc::new(SqlxApprovalRecordRepositoryImpl::new(pool));

    let command_service = Arc::new(ApprovalCommandServiceImpl::new(
        approval_record_repository.clone(),
        event_registry.clone(),
        access_control.clone(),
        notifications,
        config.retry_policy(),
    ));
    let query_service = Arc::new(ApprovalQueryServiceImpl::new(
        approval_record_repository,
        event_registry,
        access_control,
        config.retry_policy(),
    ));

    router(ApprovalRestControllerState {
        command_service,
        query_service,
        identity_context,
    })
}
