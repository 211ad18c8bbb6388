use std::{str::FromStr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use validator::Validate;

use crate::{
    event_management::{
        domain::{
            model::{
                commands::{
                    complete_event_command::CompleteEventCommand,
                    create_event_command::CreateEventCommand,
                    update_event_command::UpdateEventCommand,
                },
                enums::event_status::EventStatus,
                queries::{get_event_query::GetEventQuery, list_events_query::ListEventsQuery},
            },
            services::{
                event_command_service::EventCommandService,
                event_query_service::EventQueryService,
            },
        },
        interfaces::rest::resources::{
            create_event_request_resource::{CreateEventRequestResource, ListEventsQueryResource},
            event_resource::EventResource,
            update_event_request_resource::UpdateEventRequestResource,
        },
    },
    iam_integration::interfaces::{
        acl::identity_context_facade::IdentityContextFacade,
        rest::principal_header_resolver::resolve_principal,
    },
    shared::{
        domain::model::enums::workflow_domain_error::WorkflowDomainError,
        interfaces::rest::{
            error_mapping::{RestError, map_domain_error, map_validation_error},
            path_params::parse_uuid,
            resources::error_response_resource::ErrorResponseResource,
        },
    },
};

#[derive(Clone)]
pub struct EventRestControllerState {
    pub command_service: Arc<dyn EventCommandService>,
    pub query_service: Arc<dyn EventQueryService>,
    pub identity_context: Arc<dyn IdentityContextFacade>,
}

pub fn router(state: EventRestControllerState) -> Router {
    Router::new()
        .route("/events", post(create_event).get(list_events))
        .route("/events/:event_id", get(get_event).put(update_event))
        .route("/events/:event_id/complete", post(complete_event))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/events",
    tag = "events",
    request_body = CreateEventRequestResource,
    security(("principalHeader" = [])),
    responses(
        (status = 201, description = "Event created in PENDING", body = EventResource),
        (status = 400, description = "Invalid payload", body = ErrorResponseResource),
        (status = 401, description = "Unknown principal", body = ErrorResponseResource),
        (status = 403, description = "Not allowed to create events", body = ErrorResponseResource)
    )
)]
pub async fn create_event(
    State(state): State<EventRestControllerState>,
    headers: HeaderMap,
    Json(request): Json<CreateEventRequestResource>,
) -> Result<(StatusCode, Json<EventResource>), RestError> {
    request.validate().map_err(map_validation_error)?;
    let principal = resolve_principal(state.identity_context.as_ref(), &headers).await?;

    let command = CreateEventCommand::new(
        principal,
        request.name,
        &request.event_type,
        request.description,
        request.expected_participants,
        request.scheduled_at.as_deref(),
        request.coordinator_id.as_deref(),
    )
    .map_err(map_domain_error)?;

    let created = state
        .command_service
        .handle_create(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(EventResource::from(created))))
}

#[utoipa::path(
    get,
    path = "/events",
    tag = "events",
    params(("status" = Option<String>, Query, description = "Filter by PENDING, APPROVED, REJECTED or COMPLETED")),
    security(("principalHeader" = [])),
    responses(
        (status = 200, description = "Events visible to the principal", body = [EventResource]),
        (status = 400, description = "Invalid status filter", body = ErrorResponseResource)
    )
)]
pub async fn list_events(
    State(state): State<EventRestControllerState>,
    headers: HeaderMap,
    Query(query): Query<ListEventsQueryResource>,
) -> Result<Json<Vec<EventResource>>, RestError> {
    let principal = resolve_principal(state.identity_context.as_ref(), &headers).await?;

    let status = query
        .status
        .as_deref()
        .map(|raw| {
            EventStatus::from_str(&raw.trim().to_ascii_uppercase()).map_err(|_| {
                map_domain_error(WorkflowDomainError::InvalidInput(format!(
                    "unknown event status '{raw}'"
                )))
            })
        })
        .transpose()?;

    let events = state
        .query_service
        .handle_list(ListEventsQuery::new(principal, status))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(events.into_iter().map(EventResource::from).collect()))
}

#[utoipa::path(
    get,
    path = "/events/{event_id}",
    tag = "events",
    params(("event_id" = String, Path, description = "Event identifier")),
    security(("principalHeader" = [])),
    responses(
        (status = 200, description = "Event", body = EventResource),
        (status = 403, description = "Event not visible to the principal", body = ErrorResponseResource),
        (status = 404, description = "Event not found", body = ErrorResponseResource)
    )
)]
pub async fn get_event(
    State(state): State<EventRestControllerState>,
    headers: HeaderMap,
    Path(event_id): Path<String>,
) -> Result<Json<EventResource>, RestError> {
    let principal = resolve_principal(state.identity_context.as_ref(), &headers).await?;
    let event_id = parse_uuid(&event_id, "event_id")?;

    let event = state
        .query_service
        .handle_get(GetEventQuery::new(principal, event_id))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(EventResource::from(event)))
}

#[utoipa::path(
    put,
    path = "/events/{event_id}",
    tag = "events",
    params(("event_id" = String, Path, description = "Event identifier")),
    request_body = UpdateEventRequestResource,
    security(("principalHeader" = [])),
    responses(
        (status = 200, description = "Event details updated", body = EventResource),
        (status = 400, description = "Invalid payload or coordinator", body = ErrorResponseResource),
        (status = 403, description = "Only the creating team lead may edit", body = ErrorResponseResource),
        (status = 404, description = "Event not found", body = ErrorResponseResource),
        (status = 409, description = "Event is no longer PENDING", body = ErrorResponseResource)
    )
)]
pub async fn update_event(
    State(state): State<EventRestControllerState>,
    headers: HeaderMap,
    Path(event_id): Path<String>,
    Json(request): Json<UpdateEventRequestResource>,
) -> Result<Json<EventResource>, RestError> {
    request.validate().map_err(map_validation_error)?;
    let principal = resolve_principal(state.identity_context.as_ref(), &headers).await?;
    let event_id = parse_uuid(&event_id, "event_id")?;

    let command = UpdateEventCommand::new(
        principal,
        event_id,
        request.name,
        request.event_type.as_deref(),
        request.description,
        request.expected_participants,
        request.scheduled_at.as_deref(),
        request.coordinator_id.as_deref(),
    )
    .map_err(map_domain_error)?;

    let event = state
        .command_service
        .handle_update(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(EventResource::from(event)))
}

#[utoipa::path(
    post,
    path = "/events/{event_id}/complete",
    tag = "events",
    params(("event_id" = String, Path, description = "Event identifier")),
    security(("principalHeader" = [])),
    responses(
        (status = 200, description = "Event closed", body = EventResource),
        (status = 403, description = "Administrator only", body = ErrorResponseResource),
        (status = 404, description = "Event not found", body = ErrorResponseResource),
        (status = 409, description = "Event is not APPROVED", body = ErrorResponseResource)
    )
)]
pub async fn complete_event(
    State(state): State<EventRestControllerState>,
    headers: HeaderMap,
    Path(event_id): Path<String>,
) -> Result<Json<EventResource>, RestError> {
    let principal = resolve_principal(state.identity_context.as_ref(), &headers).await?;
    let event_id = parse_uuid(&event_id, "event_id")?;

    let event = state
        .command_service
        .handle_complete(CompleteEventCommand::new(principal, event_id))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(EventResource::from(event)))
}
