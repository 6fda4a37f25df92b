//! # todox - local task list with paged search
//!
//! A task list backed by an embedded SQLite store. Records carry a title, a
//! body, a completion flag and a due date; listing applies a completion/due
//! date filter and a case-insensitive title search before pagination.
//!
//! ## Features
//!
//! - **Record Store**: Create, read, update, delete and toggle task records
//! - **Paged Queries**: Filtered and searched pages with total counts and
//!   previous/next availability
//! - **Async Handle**: Explicit initialization state shared by every operation
//! - **Schema Migrations**: Versioned schema creation on first open
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todox::libs::store::{StoreConfig, TodoStore};
//! use todox::libs::todo::{NewTodo, PageQuery, TodoFilter};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = TodoStore::connect(StoreConfig::in_memory()).await?;
//!     store.add(NewTodo::new("Write report", "", chrono::Utc::now())).await?;
//!     let page = store.get_page(PageQuery::new(1, 10, TodoFilter::All, "report")).await?;
//!     assert_eq!(page.total, 1);
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
