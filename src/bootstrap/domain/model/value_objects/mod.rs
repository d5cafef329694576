pub mod target_database_name;
