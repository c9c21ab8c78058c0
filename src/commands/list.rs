//! Task list command.
//!
//! Restores the persisted display preference, fetches the day's tasks and
//! renders the filtered view. `--toggle-done` flips and persists the
//! preference before listing, keeping the visibility toggle a single
//! invocation.

use crate::api::Tasks;
use crate::libs::{
    config::{Config, ServerConfig},
    date,
    messages::Message,
    state::TasksState,
    task::filter_tasks,
    view::View,
};
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Flip the completed-tasks visibility before listing
    #[arg(long)]
    toggle_done: bool,
}

pub async fn cmd(list_args: ListArgs) -> Result<()> {
    let server = Config::read()?.server()?;
    let mut state = TasksState::read();

    if list_args.toggle_done {
        state.toggle()?;
        match state.show_done_tasks {
            true => msg_info!(Message::ShowingDoneTasks),
            false => msg_info!(Message::HidingDoneTasks),
        }
    }

    show(&server, &state).await
}

/// Fetches today's tasks and renders them under the given preference.
///
/// Also serves as the refresh step after every successful mutation: the
/// fetched list replaces whatever was displayed before, the server being
/// the single source of truth.
pub async fn show(server: &ServerConfig, state: &TasksState) -> Result<()> {
    let today = date::today();
    let tasks = Tasks::new(server)?.fetch(today).await?;
    let visible = filter_tasks(&tasks, state.show_done_tasks);

    msg_print!(Message::TasksHeader(date::calendar_date(today)), true);
    if visible.is_empty() {
        match tasks.is_empty() {
            true => msg_info!(Message::NoTasksForToday),
            false => msg_info!(Message::NoPendingTasks),
        }
        return Ok(());
    }
    View::tasks(&visible)
}
