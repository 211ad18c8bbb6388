use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::{
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
    venue_gate::{
        domain::model::entities::venue::Venue,
        infrastructure::persistence::repositories::venue_repository::VenueRepository,
    },
};

pub struct SqlxVenueRepositoryImpl {
    pool: PgPool,
}

impl SqlxVenueRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<Venue, WorkflowDomainError> {
        Ok(Venue::new(
            row.try_get("id")?,
            row.try_get("name")?,
            row.try_get("capacity")?,
            row.try_get("is_active")?,
        ))
    }
}

#[async_trait]
impl VenueRepository for SqlxVenueRepositoryImpl {
    async fn find_active_by_id(&self, venue_id: Uuid) -> Result<Option<Venue>, WorkflowDomainError> {
        let statement = r#"
            SELECT id, name, capacity, is_active
            FROM venues
            WHERE id = $1 AND is_active
        "#;

        let maybe_row = sqlx::query(statement)
            .bind(venue_id)
            .fetch_optional(&self.pool)
            .await?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn list_active(&self) -> Result<Vec<Venue>, WorkflowDomainError> {
        let statement = r#"
            SELECT id, name, capacity, is_active
            FROM venues
            WHERE is_active
            ORDER BY name
        "#;

        let rows = sqlx::query(statement).fetch_all(&self.pool).await?;
        rows.into_iter().map(Self::row_to_entity).collect()
    }
}
