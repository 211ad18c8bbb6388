use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::{
    access_control::interfaces::acl::access_control_facade::AccessControlFacade,
    budgeting::{
        application::{
            command_services::budget_command_service_impl::BudgetCommandServiceImpl,
            query_services::budget_query_service_impl::BudgetQueryServiceImpl,
        },
        domain::services::budget_category_catalog::BudgetCategoryCatalog,
        infrastructure::persistence::repositories::{
            budget_category_repository::BudgetCategoryRepository,
            postgres::{
                sqlx_budget_category_repository_impl::SqlxBudgetCategoryRepositoryImpl,
                sqlx_budget_line_repository_impl::SqlxBudgetLineRepositoryImpl,
            },
        },
        interfaces::rest::controllers::budget_rest_controller::{
            BudgetRestControllerState, router,
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

pub async fn load_budget_category_catalog(
    pool: PgPool,
    config: &AppConfig,
) -> Result<BudgetCategoryCatalog, String> {
    let repository = SqlxBudgetCategoryRepositoryImpl::new(pool);
    let categories = config
        .retry_policy()
        .run("budget_categories.list_all", || repository.list_all())
        .await
        .map_err(|e| e.to_string())?;

    tracing::info!(count = categories.len(), "budget category catalog loaded");
    Ok(BudgetCategoryCatalog::new(categories))
}

pub fn build_budgeting_router(
    pool: PgPool,
    config: &AppConfig,
    catalog: BudgetCategoryCatalog,
    event_registry: Arc<dyn EventRegistryFacade>,
    access_control: Arc<dyn AccessControlFacade>,
    notifications: Arc<dyn NotificationFacade>,
    identity_context: Arc<dyn IdentityContextFacade>,
) -> Router {
    let budget_line_repository = Arc::new(SqlxBudgetLineRepositoryImpl::new(pool));

    let command_service = Arc::new(BudgetCommandServiceImpl::new(
        budget_line_repository.clone(),
        event_registry.clone(),
        access_control.clone(),
        notifications,
        catalog.clone(),
        config.retry_policy(),
    ));
    let query_service = Arc::new(BudgetQueryServiceImpl::new(
        budget_line_repository,
        event_registry,
        access_control,
        catalog.clone(),
        config.retry_policy(),
    ));

    router(BudgetRestControllerState {
        command_service,
        query_service,
        identity_context,
        catalog,
    })
}
