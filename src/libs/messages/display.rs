//! Display implementation for tarefas application messages.
//!
//! Converts structured `Message` values into the human-readable text shown
//! to users. All user-facing text lives here so wording stays consistent
//! and parameters stay type-checked.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let message = match self {
            // === SESSION MESSAGES ===
            Message::SignupSuccess => "Account created! Sign in with 'tarefas login'".to_string(),
            Message::SigninSuccess => "Signed in successfully".to_string(),
            Message::LoggedOut => "Signed out, cached token removed".to_string(),
            Message::NotLoggedIn => "Not signed in. Run 'tarefas login' first".to_string(),

            // === VALIDATION MESSAGES ===
            Message::NameTooShort(min) => format!("Name must be at least {} characters long", min),
            Message::EmailInvalid => "E-mail address does not look valid".to_string(),
            Message::PasswordTooShort(min) => format!("Password must be at least {} characters long", min),
            Message::PasswordMismatch => "Password and confirmation do not match".to_string(),
            Message::DescriptionEmpty => "Task description not provided".to_string(),

            // === TASK MESSAGES ===
            Message::TasksHeader(date) => format!("📋 Tasks for {}", date),
            Message::TaskCreated(desc) => format!("Task '{}' created", desc),
            Message::TaskToggled(id) => format!("Task {} toggled", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::NoTasksForToday => "No tasks for today".to_string(),
            Message::NoPendingTasks => "No pending tasks. Completed tasks are hidden".to_string(),
            Message::ShowingDoneTasks => "Completed tasks are now shown".to_string(),
            Message::HidingDoneTasks => "Completed tasks are now hidden".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigNotFound => "No server configured. Run 'tarefas init' first".to_string(),
            Message::ConfigModuleServer => "Task server settings".to_string(),

            // === PROMPTS ===
            Message::PromptName => "Enter your name".to_string(),
            Message::PromptEmail => "Enter your e-mail".to_string(),
            Message::PromptPassword => "Enter your password".to_string(),
            Message::PromptConfirmPassword => "Confirm your password".to_string(),
            Message::PromptServerApiUrl => "Enter the task server API URL".to_string(),
        };
        write!(f, "{}", message)
    }
}
