//! Use case implementations.
//!
//! Each use case is the orchestration a form page performs, minus the
//! rendering: validate input, call the session layer, report the outcome
//! through the toast queue.

mod sign_in_use_case;
mod update_avatar_use_case;
mod update_profile_use_case;

pub use sign_in_use_case::{SignInOutcome, SignInUseCase};
pub use update_avatar_use_case::UpdateAvatarUseCase;
pub use update_profile_use_case::{UpdateProfileOutcome, UpdateProfileUseCase};
