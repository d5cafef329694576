pub mod request_log_domain_error;
