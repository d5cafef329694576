pub mod list_request_records_query;
