use super::list;
use crate::api::Tasks;
use crate::libs::{config::Config, messages::Message, state::TasksState};
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task identifier
    #[arg(required = true)]
    id: i64,
}

pub async fn cmd(delete_args: DeleteArgs) -> Result<()> {
    let server = Config::read()?.server()?;

    Tasks::new(&server)?.delete(delete_args.id).await?;
    msg_success!(Message::TaskDeleted(delete_args.id));

    list::show(&server, &TasksState::read()).await
}
