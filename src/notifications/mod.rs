use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    config::app_config::AppConfig,
    iam_integration::{
        infrastructure::persistence::repositories::principal_directory_repository::PrincipalDirectoryRepository,
        interfaces::acl::identity_context_facade::IdentityContextFacade,
    },
    notifications::{
        application::{
            acl::notification_facade_impl::NotificationFacadeImpl,
            command_services::inbox_command_service_impl::InboxCommandServiceImpl,
            query_services::inbox_query_service_impl::InboxQueryServiceImpl,
            workers::notification_delivery_worker::NotificationDeliveryWorker,
        },
        infrastructure::{
            outbox::mpsc_notification_outbox_impl::MpscNotificationOutboxImpl,
            persistence::repositories::postgres::{
                sqlx_inbox_repository_impl::SqlxInboxRepositoryImpl,
                sqlx_notification_delivery_repository_impl::SqlxNotificationDeliveryRepositoryImpl,
            },
        },
        interfaces::{
            acl::notification_facade::NotificationFacade,
            rest::controllers::inbox_rest_controller::{InboxRestControllerState, router},
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_notification_pipeline(
    pool: PgPool,
    directory_repository: Arc<dyn PrincipalDirectoryRepository>,
    config: &AppConfig,
) -> (Arc<dyn NotificationFacade>, NotificationDeliveryWorker) {
    let (outbox, receiver) = MpscNotificationOutboxImpl::channel(config.notification_queue_capacity);

    let facade = Arc::new(NotificationFacadeImpl::new(Arc::new(outbox)));
    let worker = NotificationDeliveryWorker::new(
        receiver,
        directory_repository,
        Arc::new(SqlxNotificationDeliveryRepositoryImpl::new(pool)),
        config.notification_retry_policy(),
    );

    (facade, worker)
}

pub fn build_notifications_router(
    pool: PgPool,
    config: &AppConfig,
    identity_context: Arc<dyn IdentityContextFacade>,
) -> Router {
    let inbox_repository = Arc::new(SqlxInboxRepositoryImpl::new(pool));

    router(InboxRestControllerState {
        command_service: Arc::new(InboxCommandServiceImpl::new(
            inbox_repository.clone(),
            config.retry_policy(),
        )),
        query_service: Arc::new(InboxQueryServiceImpl::new(
            inbox_repository,
            config.retry_policy(),
        )),
        identity_context,
    })
}
