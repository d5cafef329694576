pub mod schema_bootstrap_service_impl;
