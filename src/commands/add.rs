use crate::libs::formatter::parse_due;
use crate::libs::messages::Message;
use crate::libs::store::TodoStore;
use crate::libs::todo::NewTodo;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use chrono::{Duration, Utc};
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Todo title
    #[arg(required = true)]
    title: String,
    /// Free text description
    #[arg(short, long, default_value = "")]
    body: String,
    /// Due date: RFC 3339, YYYY-MM-DD, "YYYY-MM-DD HH:MM" or +2d/+3h/+30m (default: +1d)
    #[arg(short, long)]
    due: Option<String>,
    /// Create the todo already completed
    #[arg(long)]
    done: bool,
}

pub async fn cmd(args: AddArgs, store: &TodoStore) -> Result<()> {
    let title = args.title.trim();
    if title.is_empty() {
        msg_bail_anyhow!(Message::EmptyTitle);
    }

    let now = Utc::now();
    let due_date = match &args.due {
        Some(due) => parse_due(due, now)?,
        None => now + Duration::days(1),
    };

    let id = store.add(NewTodo::new(title, &args.body, due_date).completed(args.done)).await?;

    msg_success!(Message::TodoCreated(id));
    Ok(())
}
