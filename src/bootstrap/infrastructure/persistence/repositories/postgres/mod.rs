pub mod sqlx_database_administration_repository_impl;
pub mod sqlx_schema_repository_impl;
