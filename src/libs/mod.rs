//! Core library modules for todox.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage paths, messaging
//! - **Data Model**: Task records, filters, page requests and results
//! - **Query Engine**: Filter/search predicates and cursor-fed pagination
//! - **Store Handle**: Async access to the record store with explicit readiness
//! - **User Interface**: Console tables and due date parsing
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todox::libs::query::Matcher;
//! use todox::libs::todo::TodoFilter;
//!
//! let matcher = Matcher::new(TodoFilter::Open, "alpha", chrono::Utc::now());
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod query;
pub mod store;
pub mod todo;
pub mod view;
