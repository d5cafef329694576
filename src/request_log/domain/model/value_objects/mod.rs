pub mod request_duration;
pub mod request_record_id;
