pub mod command_services;
