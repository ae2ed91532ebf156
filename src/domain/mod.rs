//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;

pub use entities::{Credentials, NewToast, Session, Toast, ToastId, ToastKind, User};
pub use errors::{AuthError, StorageError};
pub use ports::{KeyValueStorePort, SessionApiPort};
