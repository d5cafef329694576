use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post},
};
use validator::Validate;

use crate::{
    audit_log::{
        domain::{
            model::{
                commands::record_audit_event_command::RecordAuditEventCommand,
                enums::audit_log_domain_error::AuditLogDomainError,
                queries::list_audit_events_query::ListAuditEventsQuery,
            },
            services::{
                audit_event_command_service::AuditEventCommandService,
                audit_event_query_service::AuditEventQueryService,
            },
        },
        interfaces::rest::resources::{
            audit_event_resource::AuditEventResource,
            perform_action_request_resource::PerformActionRequestResource,
            perform_action_response_resource::PerformActionResponseResource,
        },
    },
    shared::interfaces::rest::resources::error_response_resource::ErrorResponseResource,
};

const RECORD_FAILED_MESSAGE: &str = "Failed to log action";
const LIST_FAILED_MESSAGE: &str = "Failed to fetch logs";

#[derive(Clone)]
pub struct AuditLogRestControllerState {
    pub command_service: Arc<dyn AuditEventCommandService>,
    pub query_service: Arc<dyn AuditEventQueryService>,
    pub debug: bool,
}

pub fn router(state: AuditLogRestControllerState) -> Router {
    Router::new()
        .route("/perform_action", post(perform_action))
        .route("/logs", get(list_logs))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/perform_action",
    tag = "audit-log",
    request_body = PerformActionRequestResource,
    responses(
        (status = 200, description = "Audit event recorded", body = PerformActionResponseResource),
        (status = 400, description = "User or action missing or invalid", body = ErrorResponseResource),
        (status = 500, description = "Audit event could not be stored", body = ErrorResponseResource)
    )
)]
pub async fn perform_action(
    State(state): State<AuditLogRestControllerState>,
    payload: Result<Json<PerformActionRequestResource>, JsonRejection>,
) -> Result<Json<PerformActionResponseResource>, (StatusCode, Json<ErrorResponseResource>)> {
    let Json(request) = payload.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseResource::new(rejection.body_text())),
        )
    })?;

    RecordAuditEventCommand::require_present(request.user.as_deref(), request.action.as_deref())
        .map_err(|e| map_domain_error(e, RECORD_FAILED_MESSAGE, state.debug))?;

    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseResource::new(validation_error.to_string())),
        ));
    }

    let command = RecordAuditEventCommand::new(request.user, request.action)
        .map_err(|e| map_domain_error(e, RECORD_FAILED_MESSAGE, state.debug))?;

    let event = state
        .command_service
        .handle_record(command)
        .await
        .map_err(|e| map_domain_error(e, RECORD_FAILED_MESSAGE, state.debug))?;

    Ok(Json(PerformActionResponseResource {
        message: format!("Action logged: {event}"),
        id: event.id().value().to_string(),
        inserted_at: event.inserted_at().to_rfc3339(),
    }))
}

#[utoipa::path(
    get,
    path = "/logs",
    tag = "audit-log",
    responses(
        (status = 200, description = "Every stored audit event", body = [AuditEventResource]),
        (status = 500, description = "Audit events could not be read", body = ErrorResponseResource)
    )
)]
pub async fn list_logs(
    State(state): State<AuditLogRestControllerState>,
) -> Result<Json<Vec<AuditEventResource>>, (StatusCode, Json<ErrorResponseResource>)> {
    let events = state
        .query_service
        .handle_list(ListAuditEventsQuery::new())
        .await
        .map_err(|e| map_domain_error(e, LIST_FAILED_MESSAGE, state.debug))?;

    Ok(Json(events.into_iter().map(AuditEventResource::from).collect()))
}

fn map_domain_error(
    error: AuditLogDomainError,
    infrastructure_message: &str,
    debug: bool,
) -> (StatusCode, Json<ErrorResponseResource>) {
    match error {
        AuditLogDomainError::MissingUserOrAction
        | AuditLogDomainError::UserTooLong { .. }
        | AuditLogDomainError::ActionTooLong { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponseResource::new(error.to_string())),
        ),
        AuditLogDomainError::InfrastructureError(_) => {
            tracing::error!(error = %error, "{}", infrastructure_message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(
                    ErrorResponseResource::new(infrastructure_message)
                        .with_details(error.to_string(), debug),
                ),
            )
        }
    }
}
