mod key_value_store_port;
mod session_api_port;

pub use key_value_store_port::KeyValueStorePort;
pub use session_api_port::{AvatarUpload, PasswordChange, ProfileUpdate, SessionApiPort};
