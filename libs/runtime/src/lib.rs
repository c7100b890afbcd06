pub mod config;
pub mod logging;

pub use config::{AppConfig, CliArgs, LoggingConfig, ServerConfig};
