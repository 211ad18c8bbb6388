use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::{get, patch},
};

use crate::{
    iam_integration::interfaces::{
        acl::identity_context_facade::IdentityContextFacade,
        rest::principal_header_resolver::resolve_principal,
    },
    notifications::{
        domain::{
            model::{
                commands::{
                    mark_all_notifications_read_command::MarkAllNotificationsReadCommand,
                    mark_notification_read_command::MarkNotificationReadCommand,
                },
                queries::list_inbox_query::ListInboxQuery,
            },
            services::{
                inbox_command_service::InboxCommandService,
                inbox_query_service::InboxQueryService,
            },
        },
        interfaces::rest::resources::inbox_notification_resource::{
            InboxNotificationResource, InboxResource, ListInboxQueryResource,
            MarkAllReadResponseResource,
        },
    },
    shared::interfaces::rest::{
        error_mapping::{RestError, map_domain_error},
        path_params::parse_uuid,
        resources::error_response_resource::ErrorResponseResource,
    },
};

#[derive(Clone)]
pub struct InboxRestControllerState {
    pub command_service: Arc<dyn InboxCommandService>,
    pub query_service: Arc<dyn InboxQueryService>,
    pub identity_context: Arc<dyn IdentityContextFacade>,
}

pub fn router(state: InboxRestControllerState) -> Router {
    Router::new()
        .route("/notifications", get(list_notifications))
        .route("/notifications/mark-all-read", patch(mark_all_notifications_read))
        .route("/notifications/:notification_id/read", patch(mark_notification_read))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/notifications",
    tag = "notifications",
    params(("unread_only" = Option<bool>, Query, description = "Only return unread notifications")),
    security(("principalHeader" = [])),
    responses(
        (status = 200, description = "Caller's inbox, newest first", body = InboxResource),
        (status = 401, description = "Unknown principal", body = ErrorResponseResource)
    )
)]
pub async fn list_notifications(
    State(state): State<InboxRestControllerState>,
    headers: HeaderMap,
    Query(query): Query<ListInboxQueryResource>,
) -> Result<Json<InboxResource>, RestError> {
    let principal = resolve_principal(state.identity_context.as_ref(), &headers).await?;

    let inbox = state
        .query_service
        .handle_list(ListInboxQuery::new(principal, query.unread_only))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(InboxResource::from(inbox)))
}

#[utoipa::path(
    patch,
    path = "/notifications/{notification_id}/read",
    tag = "notifications",
    params(("notification_id" = String, Path, description = "Notification identifier")),
    security(("principalHeader" = [])),
    responses(
        (status = 200, description = "Notification marked as read", body = InboxNotificationResource),
        (status = 404, description = "Not in the caller's inbox", body = ErrorResponseResource)
    )
)]
pub async fn mark_notification_read(
    State(state): State<InboxRestControllerState>,
    headers: HeaderMap,
    Path(notification_id): Path<String>,
) -> Result<Json<InboxNotificationResource>, RestError> {
    let principal = resolve_principal(state.identity_context.as_ref(), &headers).await?;
    let notification_id = parse_uuid(&notification_id, "notification_id")?;

    let notification = state
        .command_service
        .handle_mark_read(MarkNotificationReadCommand::new(principal, notification_id))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(InboxNotificationResource::from(notification)))
}

#[utoipa::path(
    patch,
    path = "/notifications/mark-all-read",
    tag = "notifications",
    security(("principalHeader" = [])),
    responses(
        (status = 200, description = "Number of notifications newly marked as read", body = MarkAllReadResponseResource)
    )
)]
pub async fn mark_all_notifications_read(
    State(state): State<InboxRestControllerState>,
    headers: HeaderMap,
) -> Result<Json<MarkAllReadResponseResource>, RestError> {
    let principal = resolve_principal(state.identity_context.as_ref(), &headers).await?;

    let marked = state
        .command_service
        .handle_mark_all_read(MarkAllNotificationsReadCommand::new(principal))
        .await
        .map_err(map_domain_error)?;

    Ok(Json(MarkAllReadResponseResource { marked }))
}
