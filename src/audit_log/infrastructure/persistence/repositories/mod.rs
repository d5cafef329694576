pub mod audit_event_repository;
pub mod postgres;
