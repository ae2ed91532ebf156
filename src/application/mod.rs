//! Application layer with services, use cases, and DTOs.

/// Data transfer objects.
pub mod dto;
/// Stateful services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{ProfileForm, SignInForm};
pub use services::{SessionManager, ToastQueue};
pub use use_cases::{SignInUseCase, UpdateAvatarUseCase, UpdateProfileUseCase};
