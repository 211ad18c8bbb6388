use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::{
    iam_integration::{
        domain::model::{
            entities::principal::Principal, enums::principal_role::PrincipalRole,
            value_objects::principal_id::PrincipalId,
        },
        infrastructure::persistence::repositories::principal_directory_repository::{
            PrincipalDirectoryEntry, PrincipalDirectoryRepository,
        },
    },
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

pub struct SqlxPrincipalDirectoryRepositoryImpl {
    pool: PgPool,
}

impl SqlxPrincipalDirectoryRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entry(
        row: sqlx::postgres::PgRow,
    ) -> Result<PrincipalDirectoryEntry, WorkflowDomainError> {
        let id: Uuid = row.try_get("id")?;
        let role_raw: String = row.try_get("role")?;
        let display_name: String = row.try_get("display_name")?;
        let is_active: bool = row.try_get("is_active")?;

        let role = PrincipalRole::from_str(&role_raw).map_err(WorkflowDomainError::SystemFailure)?;

        Ok(PrincipalDirectoryEntry {
            principal: Principal::new(PrincipalId::from_uuid(id), role),
            display_name,
            is_active,
        })
    }
}

#[async_trait]
impl PrincipalDirectoryRepository for SqlxPrincipalDirectoryRepositoryImpl {
    async fn find_by_id(
        &self,
        principal_id: PrincipalId,
    ) -> Result<Option<PrincipalDirectoryEntry>, WorkflowDomainError> {
        let statement = r#"
            SELECT id, role, display_name, is_active
            FROM principals
            WHERE id = $1
        "#;

        let maybe_row = sqlx::query(statement)
            .bind(principal_id.value())
            .fetch_optional(&self.pool)
            .await?;

        maybe_row.map(Self::row_to_entry).transpose()
    }

    async fn find_active_by_role(
        &self,
        role: PrincipalRole,
    ) -> Result<Vec<PrincipalDirectoryEntry>, WorkflowDomainError> {
        let statement = r#"
            SELECT id, role, display_name, is_active
            FROM principals
            WHERE role = $1 AND is_active = TRUE
            ORDER BY display_name
        "#;

        let rows = sqlx::query(statement)
            .bind(role.as_str())
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Self::row_to_entry).collect()
    }
}
