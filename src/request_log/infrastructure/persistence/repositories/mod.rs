pub mod postgres;
pub mod request_record_repository;
