//! Format rules for the login and registration forms.
//!
//! Every function here is pure: it reads a `FormState` snapshot and returns
//! the `ErrorState` for it. An empty result means the form may be submitted.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::state::form::{ErrorState, Field, FormState};

pub const LOGIN_INVALID_EMAIL: &str = "Invalid email";
pub const LOGIN_PASSWORD_REQUIRED: &str = "Password required";
pub const REGISTER_INVALID_EMAIL: &str = "Invalid email format";
pub const REGISTER_USERNAME_REQUIRED: &str = "Username is required";
pub const REGISTER_WEAK_PASSWORD: &str = "Password must have uppercase, lowercase, number & special char";
pub const REGISTER_PASSWORD_MISMATCH: &str = "Passwords do not match";

/// Special characters a registration password must draw at least one from.
pub const PASSWORD_SPECIALS: &str = "@$!%*?&";

pub const MIN_PASSWORD_LEN: usize = 8;

// `\w` is spelled out so only ASCII word characters match.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}$").expect("email pattern is valid")
});

static PASSWORD_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9@$!%*?&]+$").expect("password pattern is valid"));

/// `local@domain.tld` with a 2-4 character TLD.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// At least eight characters from the allowed set, covering lowercase,
/// uppercase, a digit, and one of [`PASSWORD_SPECIALS`].
pub fn is_strong_password(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LEN
        && PASSWORD_CHARSET_REGEX.is_match(password)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_login(form: &FormState) -> ErrorState {
    let mut errors = ErrorState::default();
    if !is_valid_email(form.get(Field::Email)) {
        errors.insert(Field::Email, LOGIN_INVALID_EMAIL);
    }
    if is_blank(form.get(Field::Password)) {
        errors.insert(Field::Password, LOGIN_PASSWORD_REQUIRED);
    }
    errors
}

pub fn validate_register(form: &FormState) -> ErrorState {
    let mut errors = ErrorState::default();
    if is_blank(form.get(Field::Username)) {
        errors.insert(Field::Username, REGISTER_USERNAME_REQUIRED);
    }
    if !is_valid_email(form.get(Field::Email)) {
        errors.insert(Field::Email, REGISTER_INVALID_EMAIL);
    }
    if !is_strong_password(form.get(Field::Password)) {
        errors.insert(Field::Password, REGISTER_WEAK_PASSWORD);
    }
    if form.get(Field::Password) != form.get(Field::ConfirmPassword) {
        errors.insert(Field::ConfirmPassword, REGISTER_PASSWORD_MISMATCH);
    }
    errors
}
