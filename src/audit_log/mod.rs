use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use crate::audit_log::{
    application::{
        command_services::audit_event_command_service_impl::AuditEventCommandServiceImpl,
        query_services::audit_event_query_service_impl::AuditEventQueryServiceImpl,
    },
    infrastructure::persistence::repositories::postgres::sqlx_audit_event_repository_impl::SqlxAuditEventRepositoryImpl,
    interfaces::rest::controllers::audit_log_rest_controller::{
        AuditLogRestControllerState, router,
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_audit_log_router(pool: PgPool, debug: bool) -> Router {
    let repository = Arc::new(SqlxAuditEventRepositoryImpl::new(pool));

    let command_service = Arc::new(AuditEventCommandServiceImpl::new(repository.clone()));
    let query_service = Arc::new(AuditEventQueryServiceImpl::new(repository));

    router(AuditLogRestControllerState {
        command_service,
        query_service,
        debug,
    })
}
