//! Database layer for todox.
//!
//! SQLite persistence for todo records: connection management, versioned
//! schema migrations and the synchronous record operations the async store
//! handle runs on its blocking workers.
//!
//! ## Usage
//!
//! ```rust
//! use todox::db::{db::Db, todos::Todos};
//! use todox::libs::todo::NewTodo;
//!
//! let mut todos = Todos::from_db(Db::open_in_memory()?);
//! todos.insert(&NewTodo::new("Review code", "Check PR #123", chrono::Utc::now()))?;
//! assert_eq!(todos.fetch_all()?.len(), 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection opening and initialization.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// Todo record operations and cursor scans.
pub mod todos;
