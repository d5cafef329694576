pub mod database_administration_repository;
pub mod postgres;
pub mod schema_repository;
