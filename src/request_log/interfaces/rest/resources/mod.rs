pub mod request_record_resource;
