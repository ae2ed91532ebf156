//! GoBarber client core - the stateful heart of a barber-shop scheduling
//! front-end.
//!
//! This crate provides session management with durable persistence, a
//! transient toast notification queue, form validation, and the REST API
//! client behind them, with clean architecture and explicit dependency
//! injection.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application wiring with explicit dependency injection.
pub mod app;
/// Application layer containing services, use cases, and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "gobarber";
