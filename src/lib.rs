pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod repl;
pub mod session;
pub mod storage;
pub mod ui;
