pub mod request_log_rest_controller;
