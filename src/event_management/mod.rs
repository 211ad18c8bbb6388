use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    access_control::interfaces::acl::access_control_facade::AccessControlFacade,
    config::app_config::AppConfig,
    event_management::{
        application::{
            acl::event_registry_facade_impl::EventRegistryFacadeImpl,
            command_services::event_command_service_impl::EventCommandServiceImpl,
            query_services::event_query_service_impl::EventQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::sqlx_event_repository_impl::SqlxEventRepositoryImpl,
        interfaces::{
            acl::event_registry_facade::EventRegistryFacade,
            rest::controllers::event_rest_controller::{EventRestControllerState, router},
        },
    },
    iam_integration::{
        infrastructure::persistence::repositories::principal_directory_repository::PrincipalDirectoryRepository,
        interfaces::acl::identity_context_facade::IdentityContextFacade,
    },
    notifications::interfaces::acl::notification_facade::NotificationFacade,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_event_registry(pool: PgPool, config: &AppConfig) -> Arc<dyn EventRegistryFacade> {
    Arc::new(EventRegistryFacadeImpl::new(
        Arc::new(SqlxEventRepositoryImpl::new(pool)),
        config.retry_policy(),
    ))
}

pub fn build_event_management_router(
    pool: PgPool,
    config: &AppConfig,
    directory_repository: Arc<dyn PrincipalDirectoryRepository>,
    access_control: Arc<dyn AccessControlFacade>,
    notifications: Arc<dyn NotificationFacade>,
    identity_context: Arc<dyn IdentityContextFacade>,
) -> Router {
    let event_repository = Arc::new(SqlxEventRepositoryImpl::new(pool));

    let command_service = Arc::new(EventCommandServiceImpl::new(
        event_repository.clone(),
        directory_repository,
        access_control.clone(),
        notifications,
        config.retry_policy(),
    ));
    let query_service = Arc::new(EventQueryServiceImpl::new(
        event_repository,
        access_control,
        config.retry_policy(),
    ));

    router(EventRestControllerState {
        command_service,
        query_service,
        identity_context,
    })
}
