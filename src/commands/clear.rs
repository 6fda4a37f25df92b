use crate::libs::messages::Message;
use crate::libs::store::TodoStore;
use crate::{msg_info, msg_success};
use anyhow::Result;

pub async fn cmd(store: &TodoStore) -> Result<()> {
    match store.clear_completed().await? {
        0 => msg_info!(Message::NothingToClear),
        count => msg_success!(Message::CompletedCleared(count)),
    }
    Ok(())
}
