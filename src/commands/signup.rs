//! Account creation command.
//!
//! Collects the sign-up form (prompting for anything not given on the
//! command line), validates it client-side, and only then calls the
//! sign-up endpoint. Validation failures block the request entirely.

use crate::api::auth::{Auth, SignupCredentials};
use crate::libs::{config::Config, messages::Message, validation};
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};

#[derive(Debug, Args)]
pub struct SignupArgs {
    /// Account name (prompted when omitted)
    #[arg(long)]
    name: Option<String>,
    /// E-mail address (prompted when omitted)
    #[arg(long)]
    email: Option<String>,
}

pub async fn cmd(signup_args: SignupArgs) -> Result<()> {
    let server = Config::read()?.server()?;

    let name: String = match signup_args.name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptName.to_string())
            .interact_text()?,
    };
    let email: String = match signup_args.email {
        Some(email) => email,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmail.to_string())
            .interact_text()?,
    };
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .interact()?;
    let confirm_password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptConfirmPassword.to_string())
        .interact()?;

    validation::validate_signup(&name, &email, &password, &confirm_password)?;

    let credentials = SignupCredentials {
        name,
        email,
        password,
        confirm_password,
    };
    Auth::new(&server)?.signup(&credentials).await?;

    msg_success!(Message::SignupSuccess);
    Ok(())
}
