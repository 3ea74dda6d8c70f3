use super::*;

// =============================================================
// FormState
// =============================================================

#[test]
fn login_form_starts_with_blank_email_and_password() {
    let form = FormState::login();
    assert_eq!(form, FormState::with_fields(&LOGIN_FIELDS));
    assert_eq!(form.get(Field::Email), "");
    assert_eq!(form.get(Field::Password), "");
}

#[test]
fn register_form_holds_all_four_fields() {
    let form = FormState::register();
    assert_eq!(form, FormState::with_fields(&REGISTER_FIELDS));
    assert!(REGISTER_FIELDS.iter().all(|f| form.get(*f).is_empty()));
}

#[test]
fn get_missing_field_is_blank() {
    let form = FormState::login();
    assert_eq!(form.get(Field::Username), "");
}

#[test]
fn set_keeps_raw_value_untrimmed() {
    let mut form = FormState::login();
    form.set(Field::Email, "  a@b.co ");
    assert_eq!(form.get(Field::Email), "  a@b.co ");
}

#[test]
fn clear_blanks_values_but_keeps_fields() {
    let mut form = FormState::register();
    form.set(Field::Username, "ana");
    form.set(Field::Password, "Passw0rd!");
    form.clear();
    assert_eq!(form, FormState::register());
}

// =============================================================
// ErrorState + field edits
// =============================================================

#[test]
fn error_state_default_is_empty() {
    let errors = ErrorState::default();
    assert!(errors.is_empty());
    assert_eq!(errors.len(), 0);
}

#[test]
fn editing_a_field_clears_only_its_error() {
    let mut form = FormState::register();
    let mut errors = ErrorState::default();
    errors.insert(Field::Email, "Invalid email format");
    errors.insert(Field::Password, "bad");
    errors.insert(Field::Username, "Username is required");

    apply_field_change(&mut form, &mut errors, Field::Email, "x".to_owned());

    assert_eq!(form.get(Field::Email), "x");
    assert_eq!(errors.get(Field::Email), None);
    assert_eq!(errors.get(Field::Password), Some("bad"));
    assert_eq!(errors.get(Field::Username), Some("Username is required"));
}

#[test]
fn editing_a_field_without_error_leaves_errors_alone() {
    let mut form = FormState::login();
    let mut errors = ErrorState::default();
    errors.insert(Field::Password, "Password required");

    apply_field_change(&mut form, &mut errors, Field::Email, "a".to_owned());

    assert_eq!(errors.len(), 1);
}

#[test]
fn field_names_match_payload_keys() {
    assert_eq!(Field::Username.name(), "username");
    assert_eq!(Field::ConfirmPassword.name(), "confirmPassword");
    assert_eq!(Field::ConfirmPassword.label(), "Confirm Password");
    assert_eq!(Field::Email.input_type(), "email");
    assert_eq!(Field::ConfirmPassword.input_type(), "password");
}
