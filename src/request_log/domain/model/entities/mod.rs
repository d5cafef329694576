pub mod request_record;
