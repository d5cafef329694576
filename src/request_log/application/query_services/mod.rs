pub mod request_record_query_service_impl;
