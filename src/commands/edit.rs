use crate::libs::formatter::parse_due;
use crate::libs::messages::Message;
use crate::libs::store::TodoStore;
use crate::libs::todo::Todo;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Id of the todo to change
    id: i64,
    /// New title
    #[arg(short, long)]
    title: Option<String>,
    /// New description
    #[arg(short, long)]
    body: Option<String>,
    /// New due date, not in the past
    #[arg(short, long)]
    due: Option<String>,
}

pub async fn cmd(args: EditArgs, store: &TodoStore) -> Result<()> {
    if args.title.is_none() && args.body.is_none() && args.due.is_none() {
        msg_bail_anyhow!(Message::NothingToUpdate);
    }

    let Some(todo) = store.get(args.id).await? else {
        msg_bail_anyhow!(Message::TodoNotFound(args.id));
    };

    let id = args.id;
    store.update(apply(todo, args, Utc::now())?).await?;

    msg_success!(Message::TodoUpdated(id));
    Ok(())
}

/// Applies the requested changes to `todo`, validating them against `now`.
fn apply(mut todo: Todo, args: EditArgs, now: DateTime<Utc>) -> Result<Todo> {
    if let Some(title) = args.title {
        let title = title.trim();
        if title.is_empty() {
            msg_bail_anyhow!(Message::EmptyTitle);
        }
        todo.title = title.to_string();
    }
    if let Some(body) = args.body {
        todo.body = body;
    }
    if let Some(due) = args.due {
        let due_date = parse_due(&due, now)?;
        if due_date < now {
            msg_bail_anyhow!(Message::DueDateInPast);
        }
        todo.due_date = due_date;
    }
    Ok(todo)
}
