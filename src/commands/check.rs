use crate::libs::messages::Message;
use crate::libs::store::TodoStore;
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Id of the todo
    id: i64,
}

pub async fn cmd(args: CheckArgs, completed: bool, store: &TodoStore) -> Result<()> {
    store.toggle_completion(args.id, completed).await?;

    if completed {
        msg_success!(Message::TodoChecked(args.id));
    } else {
        msg_success!(Message::TodoUnchecked(args.id));
    }
    Ok(())
}
