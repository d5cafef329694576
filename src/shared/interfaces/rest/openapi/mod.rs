pub mod api_doc;
