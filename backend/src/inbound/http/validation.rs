//! Declarative payload validation for the auth endpoints.
//!
//! Validation is synchronous and total: a payload either converts into a
//! shape-checked domain value or yields a map from field name to every rule
//! it broke. Failures are never raised as errors; the handler turns the map
//! into a 400 response.

use crate::config::email_shaped;
use crate::domain::auth::{LoginCredentials, RegisterPayload};

use super::error::FieldErrors;

/// Minimum password length for both login and registration.
const PASSWORD_MIN_LEN: usize = 8;
/// Display-name length bounds for registration.
const NAME_MIN_LEN: usize = 2;
const NAME_MAX_LEN: usize = 100;

const EMAIL_RULE: &str = "Must be a valid email address";
const PASSWORD_LEN_RULE: &str = "Password must be at least 8 characters";
const PASSWORD_UPPER_RULE: &str = "Password must contain at least one uppercase letter";
const PASSWORD_DIGIT_RULE: &str = "Password must contain at least one number";
const NAME_MIN_RULE: &str = "Name must be at least 2 characters";
const NAME_MAX_RULE: &str = "Name must be at most 100 characters";

/// Raw login request body.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, utoipa::ToSchema)]
pub struct LoginRequest {
    /// Address the user signs in with.
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Plaintext password.
    #[schema(example = "Password1")]
    pub password: String,
}

/// Raw registration request body.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    /// Address for the new account.
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Plaintext password.
    #[schema(example = "Password1")]
    pub password: String,
    /// Display name.
    #[schema(example = "Ada Lovelace")]
    pub name: String,
}

fn push_rule(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_owned())
        .or_default()
        .push(message.to_owned());
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if !email_shaped(email) {
        push_rule(errors, "email", EMAIL_RULE);
    }
}

fn check_password_length(errors: &mut FieldErrors, password: &str) {
    if password.chars().count() < PASSWORD_MIN_LEN {
        push_rule(errors, "password", PASSWORD_LEN_RULE);
    }
}

/// Validate a login payload into shape-checked credentials.
///
/// # Errors
/// Returns the field-error map when any rule fails.
pub fn validate_login(request: LoginRequest) -> Result<LoginCredentials, FieldErrors> {
    let mut errors = FieldErrors::new();
    check_email(&mut errors, &request.email);
    check_password_length(&mut errors, &request.password);

    if errors.is_empty() {
        Ok(LoginCredentials::new(request.email, request.password))
    } else {
        Err(errors)
    }
}

/// Validate a registration payload.
///
/// Registration tightens the login rules: the password additionally needs an
/// uppercase letter and a digit, and the display name is length-bounded.
///
/// # Errors
/// Returns the field-error map when any rule fails.
pub fn validate_register(request: RegisterRequest) -> Result<RegisterPayload, FieldErrors> {
    let mut errors = FieldErrors::new();
    check_email(&mut errors, &request.email);
    check_password_length(&mut errors, &request.password);
    if !request.password.chars().any(char::is_uppercase) {
        push_rule(&mut errors, "password", PASSWORD_UPPER_RULE);
    }
    if !request.password.chars().any(|c| c.is_ascii_digit()) {
        push_rule(&mut errors, "password", PASSWORD_DIGIT_RULE);
    }

    let name_len = request.name.chars().count();
    if name_len < NAME_MIN_LEN {
        push_rule(&mut errors, "name", NAME_MIN_RULE);
    } else if name_len > NAME_MAX_LEN {
        push_rule(&mut errors, "name", NAME_MAX_RULE);
    }

    if errors.is_empty() {
        Ok(RegisterPayload::new(
            request.email,
            request.password,
            request.name,
        ))
    } else {
        Err(errors)
    }
}
