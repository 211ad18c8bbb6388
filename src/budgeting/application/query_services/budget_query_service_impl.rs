use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    access_control::{
        domain::model::enums::capability_action::CapabilityAction,
        interfaces::acl::access_control_facade::{
            AccessControlFacade, AccessControlPermissionRequest, require_permission,
        },
    },
    budgeting::{
        domain::{
            model::{
                entities::budget_category::BudgetCategory,
                queries::get_budget_query::GetBudgetQuery,
                value_objects::budget_summary::BudgetSummary,
            },
            services::{
                budget_category_catalog::BudgetCategoryCatalog,
                budget_query_service::BudgetQueryService,
            },
        },
        infrastructure::persistence::repositories::budget_line_repository::BudgetLineRepository,
    },
    event_management::interfaces::acl::event_registry_facade::EventRegistryFacade,
    shared::{
        application::retry_policy::RetryPolicy,
        domain::model::enums::workflow_domain_error::WorkflowDomainError,
    },
};

pub struct BudgetQueryServiceImpl {
    budget_line_repository: Arc<dyn BudgetLineRepository>,
    event_registry: Arc<dyn EventRegistryFacade>,
    access_control: Arc<dyn AccessControlFacade>,
    catalog: BudgetCategoryCatalog,
    retry_policy: RetryPolicy,
}

impl BudgetQueryServiceImpl {
    pub fn new(
        budget_line_repository: Arc<dyn BudgetLineRepository>,
        event_registry: Arc<dyn EventRegistryFacade>,
        access_control: Arc<dyn AccessControlFacade>,
        catalog: BudgetCategoryCatalog,
        retry_policy: RetryPolicy,
    ) -> Self {
        Self {
            budget_line_repository,
            event_registry,
            access_control,
            catalog,
            retry_policy,
        }
    }
}

#[async_trait]
impl BudgetQueryService for BudgetQueryServiceImpl {
    async fn handle_get_summary(
        &self,
        query: GetBudgetQuery,
    ) -> Result<BudgetSummary, WorkflowDomainError> {
        let event = self.event_registry.load_event(query.event_id()).await?;

        require_permission(
            self.access_control.as_ref(),
            AccessControlPermissionRequest::new(*query.principal(), CapabilityAction::ViewEvent)
                .on_resource(event.ownership()),
        )
        .await?;

        let mut lines = self
            .retry_policy
            .run("budget_lines.list_by_event", || {
                self.budget_line_repository.list_by_event(event.id())
            })
            .await?;
        lines.sort_by_key(|line| self.catalog.position(line.category_id()));

        Ok(BudgetSummary::from_lines(lines))
    }

    fn list_categories(&self) -> Vec<BudgetCategory> {
        self.catalog.all().to_vec()
    }
}
