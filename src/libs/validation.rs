//! Client-side validation of credential and task forms.
//!
//! Every rule here blocks the command before any network request is made.
//! The first failing rule wins and is reported through the message system.

use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;

/// Minimum account name length, counted after trimming whitespace.
pub const MIN_NAME_LEN: usize = 3;

/// Minimum password length required by the remote service.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validates the sign-in form: a plausible e-mail and a long-enough password.
pub fn validate_signin(email: &str, password: &str) -> Result<()> {
    if !email.contains('@') {
        msg_bail_anyhow!(Message::EmailInvalid);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        msg_bail_anyhow!(Message::PasswordTooShort(MIN_PASSWORD_LEN));
    }
    Ok(())
}

/// Validates the account-creation form.
///
/// Applies the sign-in rules plus the name-length and password-confirmation
/// checks.
pub fn validate_signup(name: &str, email: &str, password: &str, confirm_password: &str) -> Result<()> {
    if name.trim().chars().count() < MIN_NAME_LEN {
        msg_bail_anyhow!(Message::NameTooShort(MIN_NAME_LEN));
    }
    validate_signin(email, password)?;
    if password != confirm_password {
        msg_bail_anyhow!(Message::PasswordMismatch);
    }
    Ok(())
}

/// Rejects empty or whitespace-only task descriptions.
pub fn validate_description(desc: &str) -> Result<()> {
    if desc.trim().is_empty() {
        msg_bail_anyhow!(Message::DescriptionEmpty);
    }
    Ok(())
}
