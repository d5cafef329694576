pub mod audit_log;
pub mod bootstrap;
pub mod config;
pub mod request_log;
pub mod shared;
