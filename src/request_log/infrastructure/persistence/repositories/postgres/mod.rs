pub mod sqlx_request_record_repository_impl;
