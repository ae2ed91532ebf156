//! Raw form input DTOs.

use std::fmt;

/// Values captured by the sign-in form, before validation.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignInForm {
    /// E-mail field.
    pub email: String,
    /// Password field.
    pub password: String,
}

impl fmt::Debug for SignInForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Values captured by the profile form, before validation.
///
/// Empty password fields mean "keep the current password".
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    /// Name field.
    pub name: String,
    /// E-mail field.
    pub email: String,
    /// Current password field.
    pub old_password: String,
    /// New password field.
    pub password: String,
    /// New password confirmation field.
    pub password_confirmation: String,
}

impl fmt::Debug for ProfileForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("old_password", &"<redacted>")
            .field("password", &"<redacted>")
            .field("password_confirmation", &"<redacted>")
            .finish()
    }
}
