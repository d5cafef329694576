pub mod audit_event_query_service_impl;
