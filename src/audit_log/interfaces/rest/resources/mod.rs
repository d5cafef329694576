pub mod audit_event_resource;
pub mod perform_action_request_resource;
pub mod perform_action_response_resource;
