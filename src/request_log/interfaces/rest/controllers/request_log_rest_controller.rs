use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};

use crate::{
    request_log::{
        domain::{
            model::queries::list_request_records_query::ListRequestRecordsQuery,
            services::request_record_query_service::RequestRecordQueryService,
        },
        interfaces::rest::resources::request_record_resource::RequestRecordResource,
    },
    shared::interfaces::rest::resources::error_response_resource::ErrorResponseResource,
};

#[derive(Clone)]
pub struct RequestLogRestControllerState {
    pub query_service: Arc<dyn RequestRecordQueryService>,
    pub debug: bool,
}

pub fn router(state: RequestLogRestControllerState) -> Router {
    Router::new()
        .route("/requests", get(list_requests))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/requests",
    tag = "request-log",
    responses(
        (status = 200, description = "Every recorded HTTP exchange", body = [RequestRecordResource]),
        (status = 500, description = "Request records could not be read", body = ErrorResponseResource)
    )
)]
pub async fn list_requests(
    State(state): State<RequestLogRestControllerState>,
) -> Result<Json<Vec<RequestRecordResource>>, (StatusCode, Json<ErrorResponseResource>)> {
    let records = state
        .query_service
        .handle_list(ListRequestRecordsQuery::new())
        .await
        .map_err(|error| {
            tracing::error!(error = %error, "failed to fetch request records");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(
                    ErrorResponseResource::new("Failed to fetch requests")
                        .with_details(error.to_string(), state.debug),
                ),
            )
        })?;

    Ok(Json(
        records.into_iter().map(RequestRecordResource::from).collect(),
    ))
}
