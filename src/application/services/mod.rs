//! Stateful application services.

pub mod session_manager;
pub mod toast_queue;
pub mod validation;

pub use session_manager::{SessionManager, TOKEN_KEY, USER_KEY};
pub use toast_queue::ToastQueue;
pub use validation::{FieldError, FieldErrors};
