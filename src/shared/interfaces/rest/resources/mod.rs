pub mod error_response_resource;
