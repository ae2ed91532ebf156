//! Data transfer objects for the application layer.

mod form_dto;

pub use form_dto::{ProfileForm, SignInForm};
