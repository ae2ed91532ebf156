//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Scheduling backend REST client.
pub mod http;
/// Tracing setup.
pub mod logging;
/// Persistent key-value store adapters.
pub mod storage;

pub use config::{AppConfig, ConfigLoader, LogLevel};
pub use http::GoBarberApiClient;
pub use logging::init_logging;
pub use storage::{FileKeyValueStore, MemoryKeyValueStore};
