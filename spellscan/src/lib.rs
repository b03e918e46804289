// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod models;

pub use cli::{Args, run};
pub use config::{CONFIG_FILE_NAME, Config, load_config};
pub use crate::core::command::{CheckCommand, glob_patterns};
pub use crate::core::exclude::Patterns;
pub use crate::core::scanner::{ScanOptions, scan_directories};
pub use models::CheckStatus;
