use super::*;

fn registration() -> RegistrationForm {
    RegistrationForm {
        first_name: " Ada ".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        username: "ada".to_owned(),
        password: "engine".to_owned(),
        confirmed_password: "engine".to_owned(),
    }
}

// =============================================================================
// LoginForm
// =============================================================================

#[test]
fn login_trims_username_but_not_password() {
    let form = LoginForm { username: "  alice ".to_owned(), password: " pw ".to_owned() };
    let request = form.validate().expect("valid login");
    assert_eq!(request.username, "alice");
    assert_eq!(request.password, " pw ");
}

#[test]
fn login_requires_both_fields() {
    let form = LoginForm { username: "   ".to_owned(), password: "pw".to_owned() };
    assert_eq!(form.validate(), Err(FormError::Missing("username or email")));

    let form = LoginForm { username: "alice".to_owned(), password: String::new() };
    assert_eq!(form.validate(), Err(FormError::Missing("password")));
}

#[test]
fn whitespace_only_passwords_count_as_missing() {
    let form = LoginForm { username: "alice".to_owned(), password: "   ".to_owned() };
    assert_eq!(form.validate(), Err(FormError::Missing("password")));

    let form = RegistrationForm {
        password: " \t".to_owned(),
        confirmed_password: " \t".to_owned(),
        ..registration()
    };
    assert_eq!(form.validate(), Err(FormError::Missing("password")));
}

#[test]
fn missing_field_message_names_the_field() {
    assert_eq!(FormError::Missing("password").to_string(), "Enter your password.");
}

// =============================================================================
// RegistrationForm
// =============================================================================

#[test]
fn registration_builds_trimmed_request() {
    let request = registration().validate().expect("valid registration");
    assert_eq!(request.first_name, "Ada");
    assert_eq!(request.confirmed_password, "engine");
}

#[test]
fn registration_reports_first_missing_field() {
    let mut form = registration();
    form.email = String::new();
    form.username = String::new();
    assert_eq!(form.validate(), Err(FormError::Missing("email")));
}

#[test]
fn registration_rejects_mismatched_passwords() {
    let mut form = registration();
    form.confirmed_password = "engines".to_owned();
    assert_eq!(form.validate(), Err(FormError::PasswordMismatch));
}

// =============================================================================
// ResetPasswordForm
// =============================================================================

#[test]
fn reset_requires_account_and_matching_passwords() {
    let form = ResetPasswordForm {
        email_or_username: String::new(),
        new_password: "a".to_owned(),
        confirmed_password: "a".to_owned(),
    };
    assert_eq!(form.validate(), Err(FormError::Missing("email or username")));

    let form = ResetPasswordForm {
        email_or_username: "ada@example.com".to_owned(),
        new_password: "a".to_owned(),
        confirmed_password: "b".to_owned(),
    };
    assert_eq!(form.validate(), Err(FormError::PasswordMismatch));
}

#[test]
fn reset_accepts_complete_form() {
    let form = ResetPasswordForm {
        email_or_username: " ada ".to_owned(),
        new_password: "new".to_owned(),
        confirmed_password: "new".to_owned(),
    };
    let request = form.validate().expect("valid reset");
    assert_eq!(request.email_or_username, "ada");
}
