use std::sync::Arc;

use audit_trail_service::audit_log::{
    application::{
        command_services::audit_event_command_service_impl::AuditEventCommandServiceImpl,
        query_services::audit_event_query_service_impl::AuditEventQueryServiceImpl,
    },
    interfaces::rest::controllers::audit_log_rest_controller::{
        AuditLogRestControllerState, router,
    },
};
use axum::Router;

use super::fakes::FakeAuditEventRepository;

pub struct AuditLogTestHarness {
    pub repository: Arc<FakeAuditEventRepository>,
    pub service: AuditEventCommandServiceImpl,
}

pub struct AuditLogEndpointHarness {
    pub repository: Arc<FakeAuditEventRepository>,
    pub router: Router,
}

pub fn create_harness(insert_should_fail: bool) -> AuditLogTestHarness {
    let repository = Arc::new(FakeAuditEventRepository::new(insert_should_fail));
    let service = AuditEventCommandServiceImpl::new(repository.clone());

    AuditLogTestHarness {
        repository,
        service,
    }
}

pub fn create_endpoint_harness(repository_should_fail: bool, debug: bool) -> AuditLogEndpointHarness {
    let repository = Arc::new(FakeAuditEventRepository::new(repository_should_fail));

    let router = router(AuditLogRestControllerState {
        command_service: Arc::new(AuditEventCommandServiceImpl::new(repository.clone())),
        query_service: Arc::new(AuditEventQueryServiceImpl::new(repository.clone())),
        debug,
    });

    AuditLogEndpointHarness { repository, router }
}
