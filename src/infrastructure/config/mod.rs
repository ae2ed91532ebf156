//! Application configuration.

mod app_config;
mod loader;

pub use app_config::{AppConfig, LogLevel};
pub use loader::{ConfigError, ConfigLoader};
