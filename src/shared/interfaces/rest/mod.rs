pub mod openapi;
pub mod resources;
