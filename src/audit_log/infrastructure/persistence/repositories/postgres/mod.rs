pub mod sqlx_audit_event_repository_impl;
