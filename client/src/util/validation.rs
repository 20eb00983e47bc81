//! Client-side form validation for signup and login.
//!
//! Validation runs before any request is issued; a failure blocks submission
//! and its `Display` text is shown inline.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::net::types::{Credentials, NewUser};
use crate::state::interests::parse_interest_list;

pub const MIN_USERNAME_CHARS: usize = 3;
pub const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a username")]
    MissingUsername,
    #[error("Username must be at least 3 characters long")]
    UsernameTooShort,
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a password")]
    MissingPassword,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
}

/// Raw signup form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Comma-separated interests.
    pub interests: String,
}

/// Raw login form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Loose email shape: non-space text, `@`, non-space text, `.`, non-space
/// text, anywhere in the input.
const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN));

#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    match &*EMAIL_RE {
        Ok(re) => re.is_match(email),
        Err(e) => {
            log::warn!("email pattern failed to compile: {e}");
            false
        }
    }
}

fn validate_email(email: &str) -> Result<String, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(email.to_owned())
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.trim().is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}

/// Validate the signup form and build the request payload.
///
/// # Errors
///
/// Returns the first failing rule in field order.
pub fn validate_signup(form: &SignupForm) -> Result<NewUser, ValidationError> {
    let username = form.username.trim();
    if username.is_empty() {
        return Err(ValidationError::MissingUsername);
    }
    if username.chars().count() < MIN_USERNAME_CHARS {
        return Err(ValidationError::UsernameTooShort);
    }
    let email = validate_email(&form.email)?;
    validate_password(&form.password)?;
    Ok(NewUser {
        username: username.to_owned(),
        email,
        password: form.password.clone(),
        interests: parse_interest_list(&form.interests),
    })
}

/// Validate the login form and build the credentials payload.
///
/// # Errors
///
/// Returns the first failing rule in field order.
pub fn validate_login(form: &LoginForm) -> Result<Credentials, ValidationError> {
    let email = validate_email(&form.email)?;
    validate_password(&form.password)?;
    Ok(Credentials { email, password: form.password.clone() })
}
