use crate::libs::messages::Message;
use crate::libs::store::TodoStore;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Utc;

pub async fn cmd(store: &TodoStore) -> Result<()> {
    match store.newest().await? {
        Some(todo) => {
            msg_print!(Message::NewestTodoHeader);
            View::todo(&todo, Utc::now());
        }
        None => msg_info!(Message::TodosNotFound),
    }
    Ok(())
}
