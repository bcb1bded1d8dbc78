//! Client-side validation for the sign-in and sign-up forms.
//!
//! Errors are field-scoped: each [`Field`] carries at most one message, and editing a
//! field clears only that field's message.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Sign-in form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        check_email(&self.email, &mut errors);
        if self.password.is_empty() {
            errors.insert(Field::Password, "Password is required");
        }
        errors
    }
}

/// Sign-up form contents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(Field::Name, "Name is required");
        }

        check_email(&self.email, &mut errors);

        if self.password.is_empty() {
            errors.insert(Field::Password, "Password is required");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.insert(
                Field::Password,
                format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
            );
        }

        if self.confirm_password.is_empty() {
            errors.insert(Field::ConfirmPassword, "Please confirm your password");
        } else if self.password != self.confirm_password {
            errors.insert(Field::ConfirmPassword, "Passwords do not match");
        }

        errors
    }
}

fn check_email(email: &str, errors: &mut FieldErrors) {
    if email.trim().is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !looks_like_email(email) {
        errors.insert(Field::Email, "Email is invalid");
    }
}

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("valid email pattern"));

/// Loose shape check: somewhere in the text there is `something@something.something`
/// without whitespace.
pub fn looks_like_email(text: &str) -> bool {
    EMAIL.is_match(text)
}
