use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::{
    event_management::{
        domain::model::{
            entities::event::Event,
            enums::{
                event_status::EventStatus, event_type::EventType,
                event_visibility::EventVisibility,
            },
            value_objects::{event_details::EventDetails, event_name::EventName},
        },
        infrastructure::persistence::repositories::event_repository::EventRepository,
    },
    iam_integration::domain::model::value_objects::principal_id::PrincipalId,
    shared::domain::model::enums::workflow_domain_error::WorkflowDomainError,
};

const EVENT_COLUMNS: &str = r#"
    id, name, event_type, description, expected_participants, scheduled_at,
    creator_id, coordinator_id, venue_id, status, review_cycle, created_at
"#;

pub struct SqlxEventRepositoryImpl {
    pool: PgPool,
}

impl SqlxEventRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) fn row_to_entity(row: sqlx::postgres::PgRow) -> Result<Event, WorkflowDomainError> {
        let id: Uuid = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let event_type_raw: String = row.try_get("event_type")?;
        let description: Option<String> = row.try_get("description")?;
        let expected_participants: Option<i32> = row.try_get("expected_participants")?;
        let scheduled_at: Option<DateTime<Utc>> = row.try_get("scheduled_at")?;
        let creator_id: Uuid = row.try_get("creator_id")?;
        let coordinator_id: Option<Uuid> = row.try_get("coordinator_id")?;
        let venue_id: Option<Uuid> = row.try_get("venue_id")?;
        let status_raw: String = row.try_get("status")?;
        let review_cycle: i32 = row.try_get("review_cycle")?;
        let created_at: DateTime<Utc> = row.try_get("created_at")?;

        let status = EventStatus::from_str(&status_raw).map_err(|_| {
            WorkflowDomainError::SystemFailure(format!("unknown event status stored: {status_raw}"))
        })?;
        let event_type = EventType::from_str(&event_type_raw)
            .map_err(|e| WorkflowDomainError::SystemFailure(e.to_string()))?;
        let details = EventDetails::new(
            EventName::new(name).map_err(|e| WorkflowDomainError::SystemFailure(e.to_string()))?,
            event_type,
            description,
            expected_participants,
            scheduled_at,
        )
        .map_err(|e| WorkflowDomainError::SystemFailure(e.to_string()))?;

        Ok(Event::restore(
            id,
            details,
            PrincipalId::from_uuid(creator_id),
            coordinator_id.map(PrincipalId::from_uuid),
            venue_id,
            status,
            review_cycle,
            created_at,
        ))
    }
}

#[async_trait]
impl EventRepository for SqlxEventRepositoryImpl {
    async fn insert(&self, event: &Event) -> Result<(), WorkflowDomainError> {
        let statement = r#"
            INSERT INTO events (
                id, name, event_type, description, expected_participants, scheduled_at,
                creator_id, coordinator_id, venue_id, status, review_cycle, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        "#;

        let details = event.details();
        sqlx::query(statement)
            .bind(event.id())
            .bind(details.name().value())
            .bind(details.event_type().as_str())
            .bind(details.description())
            .bind(details.expected_participants())
            .bind(details.scheduled_at())
            .bind(event.creator_id().value())
            .bind(event.coordinator_id().map(|c| c.value()))
            .bind(event.venue_id())
            .bind(event.status().as_str())
            .bind(event.review_cycle())
            .bind(event.created_at())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn find_by_id(&self, event_id: Uuid) -> Result<Option<Event>, WorkflowDomainError> {
        let statement = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1");

        let maybe_row = sqlx::query(&statement)
            .bind(event_id)
            .fetch_optional(&self.pool)
            .await?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn list_visible(
        &self,
        visibility: EventVisibility,
        status: Option<EventStatus>,
    ) -> Result<Vec<Event>, WorkflowDomainError> {
        let (filter, principal) = match visibility {
            EventVisibility::All => ("TRUE", None),
            EventVisibility::CreatedBy(id) => ("creator_id = $2", Some(id.value())),
            EventVisibility::CoordinatedBy(id) => ("coordinator_id = $2", Some(id.value())),
            EventVisibility::Nothing => return Ok(Vec::new()),
        };

        let statement = format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE ($1::TEXT IS NULL OR status = $1) AND {filter}
            ORDER BY created_at DESC, id DESC
            "#
        );

        let mut query = sqlx::query(&statement).bind(status.map(|s| s.as_str()));
        if let Some(principal) = principal {
            query = query.bind(principal);
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.into_iter().map(Self::row_to_entity).collect()
    }

    async fn update_details(
        &self,
        event: &Event,
        observed_cycle: i32,
    ) -> Result<Option<Event>, WorkflowDomainError> {
        let statement = format!(
            r#"
            UPDATE events
            SET name = $1, event_type = $2, description = $3,
                expected_participants = $4, scheduled_at = $5, coordinator_id = $6
            WHERE id = $7 AND status = $8 AND review_cycle = $9
            RETURNING {EVENT_COLUMNS}
            "#
        );

        let details = event.details();
        let maybe_row = sqlx::query(&statement)
            .bind(details.name().value())
            .bind(details.event_type().as_str())
            .bind(details.description())
            .bind(details.expected_participants())
            .bind(details.scheduled_at())
            .bind(event.coordinator_id().map(|c| c.value()))
            .bind(event.id())
            .bind(EventStatus::Pending.as_str())
            .bind(observed_cycle)
            .fetch_optional(&self.pool)
            .await?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn transition_status(
        &self,
        event_id: Uuid,
        from: EventStatus,
        to: EventStatus,
        review_cycle: i32,
    ) -> Result<Option<Event>, WorkflowDomainError> {
        let statement = format!(
            r#"
            UPDATE events
            SET status = $1
            WHERE id = $2 AND status = $3 AND review_cycle = $4
            RETURNING {EVENT_COLUMNS}
            "#
        );

        let maybe_row = sqlx::query(&statement)
            .bind(to.as_str())
            .bind(event_id)
            .bind(from.as_str())
            .bind(review_cycle)
            .fetch_optional(&self.pool)
            .await?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn reopen_for_review(
        &self,
        event_id: Uuid,
        observed_cycle: i32,
    ) -> Result<Option<Event>, WorkflowDomainError> {
        let statement = format!(
            r#"
            UPDATE events
            SET status = $1, review_cycle = review_cycle + 1
            WHERE id = $2 AND status = $3 AND review_cycle = $4
            RETURNING {EVENT_COLUMNS}
            "#
        );

        let maybe_row = sqlx::query(&statement)
            .bind(EventStatus::Pending.as_str())
            .bind(event_id)
            .bind(EventStatus::Rejected.as_str())
            .bind(observed_cycle)
            .fetch_optional(&self.pool)
            .await?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn assign_venue(
        &self,
        event_id: Uuid,
        venue_id: Uuid,
    ) -> Result<Option<Event>, WorkflowDomainError> {
        let statement = format!(
            r#"
            UPDATE events
            SET venue_id = $1
            WHERE id = $2 AND status = $3
            RETURNING {EVENT_COLUMNS}
            "#
        );

        let maybe_row = sqlx::query(&statement)
            .bind(venue_id)
            .bind(event_id)
            .bind(EventStatus::Approved.as_str())
            .fetch_optional(&self.pool)
            .await?;

        maybe_row.map(Self::row_to_entity).transpose()
    }
}
