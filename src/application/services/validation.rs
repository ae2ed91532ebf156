//! Field-level form validation.
//!
//! Validation runs before anything touches the network; failures are
//! collected per field so a form can annotate each input, instead of
//! stopping at the first problem.

use std::sync::LazyLock;

use regex::Regex;

use crate::application::dto::{ProfileForm, SignInForm};
use crate::domain::entities::Credentials;
use crate::domain::ports::{PasswordChange, ProfileUpdate};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid e-mail pattern"));

/// A single field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    /// Form field the failure belongs to.
    pub field: &'static str,
    /// Human-readable message.
    pub message: &'static str,
}

/// Ordered collection of field validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    fn push(&mut self, field: &'static str, message: &'static str) {
        self.errors.push(FieldError { field, message });
    }

    /// Message for a given field, if it failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    /// Whether no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failed fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates over the failures in form order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.trim().is_empty() {
        errors.push("email", "E-mail is required");
    } else if !EMAIL_RE.is_match(email.trim()) {
        errors.push("email", "Enter a valid e-mail");
    }
}

/// Validates the sign-in form and builds credentials from it.
///
/// # Errors
/// Returns the per-field failures when the e-mail is missing or malformed,
/// or the password is missing.
pub fn validate_sign_in(form: &SignInForm) -> Result<Credentials, FieldErrors> {
    let mut errors = FieldErrors::default();

    check_email(&mut errors, &form.email);
    if form.password.is_empty() {
        errors.push("password", "Password is required");
    }

    if errors.is_empty() {
        Ok(Credentials::new(form.email.trim(), &form.password))
    } else {
        Err(errors)
    }
}

/// Validates the profile form and builds a profile update from it.
///
/// Password fields are only checked when `old_password` is filled in; in
/// that case the new password and a matching confirmation are required.
///
/// # Errors
/// Returns the per-field failures.
pub fn validate_profile(form: &ProfileForm) -> Result<ProfileUpdate, FieldErrors> {
    let mut errors = FieldErrors::default();

    if form.name.trim().is_empty() {
        errors.push("name", "Name is required");
    }
    check_email(&mut errors, &form.email);

    let wants_password_change = !form.old_password.is_empty();
    if wants_password_change {
        if form.password.is_empty() {
            errors.push("password", "Required when changing password");
        }
        if form.password_confirmation.is_empty() {
            errors.push("password_confirmation", "Required when changing password");
        } else if form.password_confirmation != form.password {
            errors.push("password_confirmation", "Confirmation does not match");
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ProfileUpdate {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        password_change: wants_password_change.then(|| PasswordChange {
            old_password: form.old_password.clone(),
            password: form.password.clone(),
            password_confirmation: form.password_confirmation.clone(),
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("teste@gmail.com", true; "plain address")]
    #[test_case("first.last@sub.example.org", true; "dotted address")]
    #[test_case("", false; "empty")]
    #[test_case("invalid-email", false; "no at sign")]
    #[test_case("a@b", false; "no domain dot")]
    #[test_case("two words@x.com", false; "whitespace")]
    fn test_email_validation(email: &str, valid: bool) {
        let form = SignInForm {
            email: email.to_string(),
            password: "12341234".to_string(),
        };
        assert_eq!(validate_sign_in(&form).is_ok(), valid);
    }

    #[test]
    fn test_sign_in_collects_all_failures() {
        let form = SignInForm::default();
        let errors = validate_sign_in(&form).unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("email"), Some("E-mail is required"));
        assert_eq!(errors.get("password"), Some("Password is required"));
        assert_eq!(errors.get("name"), None);
    }

    #[test]
    fn test_sign_in_trims_email() {
        let form = SignInForm {
            email: " teste@gmail.com ".to_string(),
            password: "123123123".to_string(),
        };
        let credentials = validate_sign_in(&form).unwrap();
        assert_eq!(credentials.email(), "teste@gmail.com");
    }

    #[test]
    fn test_profile_without_password_change() {
        let form = ProfileForm {
            name: "test name".to_string(),
            email: "teste@gmail.com".to_string(),
            ..ProfileForm::default()
        };

        let update = validate_profile(&form).unwrap();
        assert_eq!(update.name, "test name");
        assert!(update.password_change.is_none());
    }

    #[test]
    fn test_profile_password_required_when_rotating() {
        let form = ProfileForm {
            name: "test name".to_string(),
            email: "teste@gmail.com".to_string(),
            old_password: "123123123".to_string(),
            ..ProfileForm::default()
        };

        let errors = validate_profile(&form).unwrap_err();
        assert_eq!(
            errors.get("password"),
            Some("Required when changing password")
        );
        assert_eq!(
            errors.get("password_confirmation"),
            Some("Required when changing password")
        );
    }

    #[test]
    fn test_profile_confirmation_must_match() {
        let form = ProfileForm {
            name: "test name".to_string(),
            email: "teste@gmail.com".to_string(),
            old_password: "123123123".to_string(),
            password: "new-password".to_string(),
            password_confirmation: "different".to_string(),
        };

        let errors = validate_profile(&form).unwrap_err();
        assert_eq!(
            errors.get("password_confirmation"),
            Some("Confirmation does not match")
        );
    }

    #[test]
    fn test_profile_with_valid_rotation() {
        let form = ProfileForm {
            name: "test name".to_string(),
            email: "teste@gmail.com".to_string(),
            old_password: "123123123".to_string(),
            password: "new-password".to_string(),
            password_confirmation: "new-password".to_string(),
        };

        let update = validate_profile(&form).unwrap();
        let change = update.password_change.unwrap();
        assert_eq!(change.old_password, "123123123");
        assert_eq!(change.password, "new-password");
    }
}
