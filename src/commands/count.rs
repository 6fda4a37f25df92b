use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::store::TodoStore;
use crate::libs::todo::TodoFilter;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CountArgs {
    /// Completion/due date filter (default from configuration)
    #[arg(short, long, value_enum)]
    filter: Option<TodoFilter>,
}

pub async fn cmd(args: CountArgs, config: &Config, store: &TodoStore) -> Result<()> {
    let filter = args.filter.unwrap_or(config.default_filter);
    let count = store.count(filter).await?;

    msg_print!(Message::TodoCount(count, filter.to_string()));
    Ok(())
}
