use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::{
    budgeting::{
        domain::model::entities::budget_category::BudgetCategory,
        infrastructure::persistence::repositories::budget_category_repository::BudgetCategoryRepository,
    },
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

pub struct SqlxBudgetCategoryRepositoryImpl {
    pool: PgPool,
}

impl SqlxBudgetCategoryRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BudgetCategoryRepository for SqlxBudgetCategoryRepositoryImpl {
    async fn list_all(&self) -> Result<Vec<BudgetCategory>, WorkflowDomainError> {
        let statement = r#"
            SELECT id, name, description, display_order
            FROM budget_categories
            ORDER BY display_order, name
        "#;

        let rows = sqlx::query(statement).fetch_all(&self.pool).await?;

        rows.into_iter()
            .map(|row| {
                Ok(BudgetCategory::new(
                    row.try_get("id")?,
                    row.try_get("name")?,
                    row.try_get("description")?,
                    row.try_get("display_order")?,
                ))
            })
            .collect()
    }
}
