use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::store::TodoStore;
use crate::libs::todo::{PageQuery, TodoFilter};
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use chrono::Utc;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Page number, starting at 1
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    page: u64,
    /// Todos per page (default from configuration)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    size: Option<u64>,
    /// Completion/due date filter (default from configuration)
    #[arg(short, long, value_enum)]
    filter: Option<TodoFilter>,
    /// Case-insensitive text to look for in titles
    #[arg(short = 'q', long, default_value = "")]
    search: String,
}

pub async fn cmd(args: ListArgs, config: &Config, store: &TodoStore) -> Result<()> {
    let filter = args.filter.unwrap_or(config.default_filter);
    let page_size = args.size.map(|size| size as usize).unwrap_or(config.page_size);
    let page_number = args.page as usize;

    let page = store.get_page(PageQuery::new(page_number, page_size, filter, &args.search)).await?;

    if page.todos.is_empty() {
        msg_info!(Message::TodosNotFound);
    } else {
        msg_print!(Message::TodosHeader(filter.to_string()));
        View::page(&page, Utc::now());
    }
    msg_print!(Message::PageSummary(page_number, page.todos.len(), page.total));
    if page.has_next {
        msg_print!(Message::PageHint(page_number + 1));
    }

    Ok(())
}
