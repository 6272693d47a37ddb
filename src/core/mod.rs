pub mod calculator;
pub mod config;
pub mod log_file;
pub mod logic;
pub mod parser;
