pub mod record_audit_event_command;
