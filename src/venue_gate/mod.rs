use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    access_control::interfaces::acl::access_control_facade::AccessControlFacade,
    budgeting::domain::services::budget_category_catalog::BudgetCategoryCatalog,
    config::app_config::AppConfig,
    event_management::interfaces::acl::event_registry_facade::EventRegistryFacade,
    iam_integration::interfaces::acl::identity_context_facade::IdentityContextFacade,
    notifications::interfaces::acl::notification_facade::NotificationFacade,
    venue_gate::{
        application::{
            command_services::venue_gate_command_service_impl::VenueGateCommandServiceImpl,
            query_services::venue_gate_query_service_impl::VenueGateQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::{
            sqlx_expense_repository_impl::SqlxExpenseRepositoryImpl,
            sqlx_venue_repository_impl::SqlxVenueRepositoryImpl,
        },
        interfaces::rest::controllers::venue_gate_rest_controller::{
            VenueGateRestControllerState, router,
        },
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_venue_gate_router(
    pool: PgPool,
    config: &AppConfig,
    catalog: BudgetCategoryCatalog,
    event_registry: Arc<dyn EventRegistryFacade>,
    access_control: Arc<dyn AccessControlFacade>,
    notifications: Arc<dyn NotificationFacade>,
    identity_context: Arc<dyn IdentityContextFacade>,
) -> Router {
    let venue_repository = Arc::new(SqlxVenueRepositoryImpl::new(pool.clone()));
    let expense_repository = Arc::new(SqlxExpenseRepositoryImpl::new(pool));

    let command_service = Arc::new(VenueGateCommandServiceImpl::new(
        venue_repository.clone(),
        expense_repository.clone(),
        event_registry.clone(),
        access_control.clone(),
        notifications,
        catalog.clone(),
        config.retry_policy(),
    ));
    let query_service = Arc::new(VenueGateQueryServiceImpl::new(
        venue_repository,
        expense_repository,
        event_registry,
        access_control,
        config.retry_policy(),
    ));

    router(VenueGateRestControllerState {
        command_service,
        query_service,
        identity_context,
        catalog,
    })
}
