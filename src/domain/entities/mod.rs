//! Domain entities.

mod credentials;
mod session;
mod toast;
mod user;

pub use credentials::Credentials;
pub use session::Session;
pub use toast::{NewToast, Toast, ToastId, ToastKind};
pub use user::User;
