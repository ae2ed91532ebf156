//! REST API adapter.

mod api_client;
mod dto;

pub use api_client::{DEFAULT_API_BASE, GoBarberApiClient};
