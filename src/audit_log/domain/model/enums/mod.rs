pub mod audit_log_domain_error;
