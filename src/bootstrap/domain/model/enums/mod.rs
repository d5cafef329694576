pub mod bootstrap_domain_error;
pub mod bootstrap_status;
pub mod database_creation_outcome;
pub mod schema_plan;
