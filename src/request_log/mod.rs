use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::request_log::{
    application::{
        command_services::request_record_command_service_impl::RequestRecordCommandServiceImpl,
        query_services::request_record_query_service_impl::RequestRecordQueryServiceImpl,
    },
    infrastructure::persistence::repositories::postgres::sqlx_request_record_repository_impl::SqlxRequestRecordRepositoryImpl,
    interfaces::rest::{
        controllers::request_log_rest_controller::{RequestLogRestControllerState, router},
        middleware::request_instrumentation_middleware::RequestInstrumentationState,
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_request_log_router(pool: PgPool, debug: bool) -> Router {
    let repository = Arc::new(SqlxRequestRecordRepositoryImpl::new(pool));
    let query_service = Arc::new(RequestRecordQueryServiceImpl::new(repository));

    router(RequestLogRestControllerState {
        query_service,
        debug,
    })
}

pub fn build_request_instrumentation_state(pool: PgPool) -> RequestInstrumentationState {
    let repository = Arc::new(SqlxRequestRecordRepositoryImpl::new(pool));

    RequestInstrumentationState::new(Arc::new(RequestRecordCommandServiceImpl::new(repository)))
}
