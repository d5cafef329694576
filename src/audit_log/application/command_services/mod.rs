pub mod audit_event_command_service_impl;
