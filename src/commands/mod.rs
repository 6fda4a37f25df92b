//! Command-line interface for todox.
//!
//! Each subcommand lives in its own module and receives a ready
//! [`TodoStore`] handle built from the user's configuration.

pub mod add;
pub mod check;
pub mod clear;
pub mod count;
pub mod delete;
pub mod edit;
pub mod init;
pub mod list;
pub mod newest;

use crate::libs::config::Config;
use crate::libs::store::{StoreConfig, TodoStore};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create a todo")]
    Add(add::AddArgs),
    #[command(about = "List todos page by page", visible_alias = "ls")]
    List(list::ListArgs),
    #[command(about = "Change title, body or due date of a todo")]
    Edit(edit::EditArgs),
    #[command(about = "Mark a todo as done")]
    Check(check::CheckArgs),
    #[command(about = "Mark a todo as not done")]
    Uncheck(check::CheckArgs),
    #[command(about = "Delete a todo", visible_alias = "rm")]
    Delete(delete::DeleteArgs),
    #[command(about = "Delete all completed todos")]
    Clear,
    #[command(about = "Show the most recently created todo")]
    Newest,
    #[command(about = "Count todos matching a filter")]
    Count(count::CountArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();

        if let Commands::Init(args) = cli.command {
            return init::cmd(args);
        }

        let config = Config::read()?;
        let store = TodoStore::connect(StoreConfig::from_config(&config)?).await?;

        match cli.command {
            Commands::Init(_) => Ok(()),
            Commands::Add(args) => add::cmd(args, &store).await,
            Commands::List(args) => list::cmd(args, &config, &store).await,
            Commands::Edit(args) => edit::cmd(args, &store).await,
            Commands::Check(args) => check::cmd(args, true, &store).await,
            Commands::Uncheck(args) => check::cmd(args, false, &store).await,
            Commands::Delete(args) => delete::cmd(args, &store).await,
            Commands::Clear => clear::cmd(&store).await,
            Commands::Newest => newest::cmd(&store).await,
            Commands::Count(args) => count::cmd(args, &config, &store).await,
        }
    }
}
