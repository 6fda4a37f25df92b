use crate::libs::messages::Message;
use crate::libs::store::TodoStore;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Ids of the todos to delete
    #[arg(required = true)]
    ids: Vec<i64>,
}

pub async fn cmd(args: DeleteArgs, store: &TodoStore) -> Result<()> {
    for id in args.ids {
        if store.delete(id).await? {
            msg_success!(Message::TodoDeleted(id));
        } else {
            msg_warning!(Message::TodoAlreadyAbsent(id));
        }
    }
    Ok(())
}
