//! Form field values and per-field validation messages.
//!
//! DESIGN
//! ======
//! Both maps are keyed by the closed `Field` enum so a page can only hold the
//! inputs it renders. `FormState` always mirrors the raw input; `ErrorState`
//! is replaced wholesale on submit and trimmed one entry at a time on edit.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::BTreeMap;

/// An input on the login or registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Name used for the `name` attribute and the JSON payload key.
    pub fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    /// Human-readable input label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    /// HTML input type for the field.
    pub fn input_type(self) -> &'static str {
        match self {
            Self::Username => "text",
            Self::Email => "email",
            Self::Password | Self::ConfirmPassword => "password",
        }
    }
}

/// Fields rendered by the login page, in display order.
pub const LOGIN_FIELDS: [Field; 2] = [Field::Email, Field::Password];

/// Fields rendered by the registration page, in display order.
pub const REGISTER_FIELDS: [Field; 4] = [Field::Username, Field::Email, Field::Password, Field::ConfirmPassword];

/// Live values of a form's inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    values: BTreeMap<Field, String>,
}

impl FormState {
    /// Build a form holding `fields`, each starting blank.
    pub fn with_fields(fields: &[Field]) -> Self {
        Self { values: fields.iter().map(|f| (*f, String::new())).collect() }
    }

    pub fn login() -> Self {
        Self::with_fields(&LOGIN_FIELDS)
    }

    pub fn register() -> Self {
        Self::with_fields(&REGISTER_FIELDS)
    }

    /// Current value of `field`, or `""` when the form does not hold it.
    pub fn get(&self, field: Field) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    /// Overwrite `field` with the raw input value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Reset every held field to blank.
    pub fn clear(&mut self) {
        for value in self.values.values_mut() {
            value.clear();
        }
    }
}

/// Per-field messages from the most recent validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorState {
    errors: BTreeMap<Field, String>,
}

impl ErrorState {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Drop the message for `field`, leaving other entries intact.
    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    /// `true` when the form passed validation.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

/// Keystroke handler: store the new raw value and clear that field's error.
pub fn apply_field_change(form: &mut FormState, errors: &mut ErrorState, field: Field, value: String) {
    form.set(field, value);
    errors.clear(field);
}
