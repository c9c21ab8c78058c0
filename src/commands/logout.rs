use crate::api::TokenStore;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    TokenStore::new()?.delete()?;
    msg_success!(Message::LoggedOut);
    Ok(())
}
