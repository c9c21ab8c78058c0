pub mod add;
pub mod delete;
pub mod init;
pub mod list;
pub mod login;
pub mod logout;
pub mod signup;
pub mod toggle;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create an account on the task server")]
    Signup(signup::SignupArgs),
    #[command(about = "Sign in and cache the session token")]
    Login(login::LoginArgs),
    #[command(about = "Sign out and remove the cached token")]
    Logout,
    #[command(about = "List today's tasks")]
    List(list::ListArgs),
    #[command(about = "Create a task", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Toggle task completion", arg_required_else_help = true)]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Signup(args) => signup::cmd(args).await,
            Commands::Login(args) => login::cmd(args).await,
            Commands::Logout => logout::cmd(),
            Commands::List(args) => list::cmd(args).await,
            Commands::Add(args) => add::cmd(args).await,
            Commands::Toggle(args) => toggle::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
        }
    }
}
