use utoipa::OpenApi;

use crate::{
    audit_log::interfaces::rest::resources::{
        audit_event_resource::AuditEventResource,
        perform_action_request_resource::PerformActionRequestResource,
        perform_action_response_resource::PerformActionResponseResource,
    },
    request_log::interfaces::rest::resources::request_record_resource::RequestRecordResource,
    shared::interfaces::rest::resources::error_response_resource::ErrorResponseResource,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::audit_log::interfaces::rest::controllers::audit_log_rest_controller::perform_action,
        crate::audit_log::interfaces::rest::controllers::audit_log_rest_controller::list_logs,
        crate::request_log::interfaces::rest::controllers::request_log_rest_controller::list_requests
    ),
    components(
        schemas(
            PerformActionRequestResource,
            PerformActionResponseResource,
            AuditEventResource,
            RequestRecordResource,
            ErrorResponseResource
        )
    ),
    tags(
        (name = "audit-log", description = "Caller-reported audit events"),
        (name = "request-log", description = "Recorded HTTP exchanges handled by this service")
    )
)]
pub struct ApiDoc;
