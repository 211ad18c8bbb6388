use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    access_control::{
        application::{
            acl::access_control_facade_impl::AccessControlFacadeImpl,
            query_services::access_control_query_service_impl::AccessControlQueryServiceImpl,
        },
        domain::services::access_control_query_service::AccessControlQueryService,
        infrastructure::persistence::repositories::postgres::sqlx_authorization_decision_audit_repository_impl::SqlxAuthorizationDecisionAuditRepositoryImpl,
        interfaces::{
            acl::access_control_facade::AccessControlFacade,
            rest::controllers::access_control_rest_controller::{
                AccessControlRestControllerState, router,
            },
        },
    },
    config::app_config::AppConfig,
    iam_integration::interfaces::acl::identity_context_facade::IdentityContextFacade,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_access_control_query_service(
    pool: PgPool,
    config: &AppConfig,
) -> Arc<dyn AccessControlQueryService> {
    let audit_repository = Arc::new(SqlxAuthorizationDecisionAuditRepositoryImpl::new(pool));
    Arc::new(AccessControlQueryServiceImpl::new(
        audit_repository,
        config.retry_policy(),
    ))
}

pub fn build_access_control_facade(
    query_service: Arc<dyn AccessControlQueryService>,
) -> Arc<dyn AccessControlFacade> {
    Arc::new(AccessControlFacadeImpl::new(query_service))
}

pub fn build_access_control_router(
    query_service: Arc<dyn AccessControlQueryService>,
    identity_context: Arc<dyn IdentityContextFacade>,
) -> Router {
    router(AccessControlRestControllerState {
        query_service,
        identity_context,
    })
}
