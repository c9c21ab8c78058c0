//! # Tarefas - Command-Line Task Client
//!
//! A command-line client for the Tarefas task service: sign in, list the
//! day's tasks, and create, complete or delete tasks against a remote
//! HTTP API.
//!
//! ## Features
//!
//! - **Accounts**: Sign-up and sign-in with client-side form validation
//! - **Session**: Bearer token cached locally and attached to every task call
//! - **Task List**: Day-scoped listing with a persisted show/hide-done preference
//! - **Task Management**: Create, toggle completion, and delete tasks
//! - **Server Authority**: Every mutation re-fetches the list; no optimistic updates
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tarefas::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
