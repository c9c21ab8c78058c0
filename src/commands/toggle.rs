use super::list;
use crate::api::Tasks;
use crate::libs::{config::Config, messages::Message, state::TasksState};
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Task identifier
    #[arg(required = true)]
    id: i64,
}

/// Toggles the completion state of a task and refreshes the list.
///
/// The server decides the resulting completion timestamp; toggling the
/// same task twice returns it to its original state.
pub async fn cmd(toggle_args: ToggleArgs) -> Result<()> {
    let server = Config::read()?.server()?;

    Tasks::new(&server)?.toggle(toggle_args.id).await?;
    msg_success!(Message::TaskToggled(toggle_args.id));

    list::show(&server, &TasksState::read()).await
}
