pub mod request_record_command_service;
pub mod request_record_query_service;
