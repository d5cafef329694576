pub mod request_record_command_service_impl;
