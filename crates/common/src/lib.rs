pub mod config;
pub mod manifest;
pub mod table;
