pub mod audit_action;
pub mod audit_event_id;
pub mod audit_user;
