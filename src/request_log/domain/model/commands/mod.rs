pub mod record_completed_request_command;
