//! Sign-in command.
//!
//! Validates the credentials locally, exchanges them for a session token
//! and caches it so the task commands can attach it as a bearer
//! credential. A rejection from the service is reported once; there is no
//! retry loop.

use crate::api::auth::{Auth, SigninCredentials};
use crate::libs::{config::Config, messages::Message, validation};
use crate::msg_success;
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// E-mail address (prompted when omitted)
    #[arg(long)]
    email: Option<String>,
}

pub async fn cmd(login_args: LoginArgs) -> Result<()> {
    let server = Config::read()?.server()?;

    let email: String = match login_args.email {
        Some(email) => email,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEmail.to_string())
            .interact_text()?,
    };
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPassword.to_string())
        .interact()?;

    validation::validate_signin(&email, &password)?;

    let credentials = SigninCredentials { email, password };
    Auth::new(&server)?.signin(&credentials).await?;

    msg_success!(Message::SigninSuccess);
    Ok(())
}
