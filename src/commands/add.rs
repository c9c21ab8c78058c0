//! Task creation command.
//!
//! An empty or whitespace-only description is rejected before any request
//! is made. On success the list is re-fetched so the display reflects the
//! server's state.

use super::list;
use crate::api::Tasks;
use crate::libs::{config::Config, date, messages::Message, state::TasksState, validation};
use crate::msg_success;
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task description
    #[arg(required = true)]
    desc: String,
    /// Estimated date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
}

pub async fn cmd(add_args: AddArgs) -> Result<()> {
    validation::validate_description(&add_args.desc)?;

    let server = Config::read()?.server()?;
    let estimate_at = add_args.date.unwrap_or_else(date::today);

    Tasks::new(&server)?.create(&add_args.desc, estimate_at).await?;
    msg_success!(Message::TaskCreated(add_args.desc));

    list::show(&server, &TasksState::read()).await
}
