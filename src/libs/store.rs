//! Async handle over the todo record store.
//!
//! [`TodoStore::open`] returns at once and opens the database on a blocking
//! worker. The outcome is published once through a `watch` channel as an
//! explicit readiness state, and every operation waits on that state before
//! touching the connection:
//!
//! ```text
//! open() ──▶ Pending ──▶ Ready(connection)   operations run
//!                   └──▶ Failed(reason)      every operation: StoreUnavailable
//! ```
//!
//! All clones of a handle share one connection behind a mutex. Each
//! operation runs as one transaction on `spawn_blocking`; callers that await
//! each call before issuing the next observe their own writes in order.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todox::libs::store::{StoreConfig, TodoStore};
//! use todox::libs::todo::{NewTodo, TodoFilter};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let store = TodoStore::connect(StoreConfig::file("todox.db")).await?;
//! let id = store.add(NewTodo::new("Pay rent", "", chrono::Utc::now())).await?;
//! store.toggle_completion(id, true).await?;
//! assert_eq!(store.count(TodoFilter::Done).await?, 1);
//! # Ok(())
//! # }
//! ```

use super::config::Config;
use super::error::{Result, StoreError};
use super::messages::Message;
use super::todo::{NewTodo, Page, PageQuery, Todo, TodoFilter};
use crate::db::db::Db;
use crate::db::todos::Todos;
use crate::msg_debug;
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;

/// Where the store keeps its data.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Database file; `None` keeps everything in memory.
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        StoreConfig { path: Some(path.into()) }
    }

    pub fn in_memory() -> Self {
        StoreConfig { path: None }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::file(config.database_path()?))
    }

    fn describe(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => ":memory:".to_string(),
        }
    }
}

enum Readiness {
    Pending,
    Ready(Arc<Mutex<Todos>>),
    Failed(String),
}

/// Cloneable handle to the record store.
#[derive(Clone)]
pub struct TodoStore {
    ready: watch::Receiver<Readiness>,
}

impl TodoStore {
    /// Starts opening the store in the background and returns immediately.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn open(config: StoreConfig) -> Self {
        let (tx, rx) = watch::channel(Readiness::Pending);

        tokio::task::spawn_blocking(move || {
            msg_debug!(Message::StoreOpening(config.describe()));
            let state = match Self::initialize(&config) {
                Ok(todos) => {
                    msg_debug!(Message::StoreReady);
                    Readiness::Ready(Arc::new(Mutex::new(todos)))
                }
                Err(e) => {
                    msg_debug!(Message::StoreInitFailed(e.to_string()));
                    Readiness::Failed(e.to_string())
                }
            };
            // Nobody left to tell when every handle is gone.
            let _ = tx.send(state);
        });

        TodoStore { ready: rx }
    }

    /// Opens the store and waits for initialization to finish.
    pub async fn connect(config: StoreConfig) -> Result<Self> {
        let store = Self::open(config);
        store.handle().await?;
        Ok(store)
    }

    fn initialize(config: &StoreConfig) -> anyhow::Result<Todos> {
        let db = match &config.path {
            Some(path) => Db::open(path)?,
            None => Db::open_in_memory()?,
        };
        Ok(Todos::from_db(db))
    }

    /// Waits until initialization has settled.
    pub async fn ready(&self) -> Result<()> {
        self.handle().await.map(|_| ())
    }

    pub async fn add(&self, todo: NewTodo) -> Result<i64> {
        self.run(move |todos| todos.insert(&todo)).await
    }

    pub async fn get_all(&self) -> Result<Vec<Todo>> {
        self.run(|todos| todos.fetch_all()).await
    }

    pub async fn get(&self, id: i64) -> Result<Option<Todo>> {
        self.run(move |todos| todos.get_by_id(id)).await
    }

    /// Full replace of the record with `todo.id`; `NotFound` if absent.
    pub async fn update(&self, todo: Todo) -> Result<()> {
        self.run(move |todos| todos.update(&todo)).await
    }

    /// Idempotent delete; `Ok(false)` when there was nothing to remove.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        self.run(move |todos| todos.delete(id)).await
    }

    pub async fn toggle_completion(&self, id: i64, completed: bool) -> Result<()> {
        self.run(move |todos| todos.set_completed(id, completed)).await
    }

    pub async fn clear_completed(&self) -> Result<usize> {
        self.run(|todos| todos.delete_completed()).await
    }

    pub async fn count(&self, filter: TodoFilter) -> Result<usize> {
        self.run(move |todos| todos.count(filter)).await
    }

    pub async fn newest(&self) -> Result<Option<Todo>> {
        self.run(|todos| todos.newest()).await
    }

    pub async fn get_page(&self, query: PageQuery) -> Result<Page> {
        self.run(move |todos| todos.page(&query)).await
    }

    async fn handle(&self) -> Result<Arc<Mutex<Todos>>> {
        let mut ready = self.ready.clone();
        let state = ready
            .wait_for(|state| !matches!(state, Readiness::Pending))
            .await
            .map_err(|_| StoreError::StoreUnavailable("initialization was aborted".to_string()))?;

        match &*state {
            Readiness::Ready(todos) => Ok(Arc::clone(todos)),
            Readiness::Failed(reason) => Err(StoreError::StoreUnavailable(reason.clone())),
            Readiness::Pending => Err(StoreError::StoreUnavailable("initialization has not finished".to_string())),
        }
    }

    async fn run<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Todos) -> Result<T> + Send + 'static,
    {
        let todos = self.handle().await?;

        tokio::task::spawn_blocking(move || {
            let mut guard = todos.lock();
            op(&mut guard)
        })
        .await
        .map_err(|e| StoreError::Worker(e.to_string()))?
    }
}
