pub mod code;
pub mod config;
pub mod emit;
pub mod fetch;
pub mod generate;
pub mod table;
