pub mod audit_event_command_service;
pub mod audit_event_query_service;
