//! Database operations for todo records.
//!
//! `Todos` owns one SQLite connection and exposes the synchronous half of the
//! record store. Every method is a single statement or a single explicit
//! transaction, so each call is isolated from the others.
//!
//! Listings and counts never push the filter into SQL: they walk a forward
//! cursor over `todos` in id order and hand each row to the query engine,
//! which keeps the predicate semantics in one place.
//!
//! ## Usage
//!
//! ```rust
//! use todox::db::{db::Db, todos::Todos};
//! use todox::libs::todo::{NewTodo, TodoFilter};
//!
//! let mut todos = Todos::from_db(Db::open_in_memory()?);
//! let id = todos.insert(&NewTodo::new("Review code", "Check PR #123", chrono::Utc::now()))?;
//! todos.set_completed(id, true)?;
//! assert_eq!(todos.count(TodoFilter::Done)?, 1);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::db::Db;
use crate::libs::error::{Result, StoreError};
use crate::libs::messages::Message;
use crate::libs::query::{Matcher, Paginator};
use crate::libs::todo::{NewTodo, Page, PageQuery, Todo, TodoFilter};
use crate::msg_debug;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

const TODO_COLUMNS: &str = "id, title, body, completed, created_date, due_date";
const INSERT_TODO: &str = "INSERT INTO todos (title, body, completed, created_date, due_date) VALUES (?1, ?2, ?3, ?4, ?5)";
const UPDATE_TODO: &str = "UPDATE todos SET title = ?2, body = ?3, completed = ?4, due_date = ?5 WHERE id = ?1";
const UPDATE_COMPLETED: &str = "UPDATE todos SET completed = ?2 WHERE id = ?1";
const DELETE_TODO: &str = "DELETE FROM todos WHERE id = ?1";
const DELETE_COMPLETED: &str = "DELETE FROM todos WHERE completed = 1";

pub struct Todos {
    conn: Connection,
}

impl Todos {
    pub fn from_db(db: Db) -> Todos {
        Todos { conn: db.conn }
    }

    /// Stores a new record and returns its assigned id. The created date is
    /// taken from the clock, not from the caller.
    pub fn insert(&mut self, todo: &NewTodo) -> Result<i64> {
        self.conn
            .execute(INSERT_TODO, params![todo.title, todo.body, todo.completed, Utc::now(), todo.due_date])?;
        let id = self.conn.last_insert_rowid();

        msg_debug!(Message::TodoInserted(id));
        Ok(id)
    }

    /// Every record in ascending id order.
    pub fn fetch_all(&mut self) -> Result<Vec<Todo>> {
        let mut stmt = self.conn.prepare(&format!("SELECT {} FROM todos ORDER BY id", TODO_COLUMNS))?;
        let todo_iter = stmt.query_map([], todo_from_row)?;

        let mut todos = Vec::new();
        for todo in todo_iter {
            todos.push(todo?);
        }
        Ok(todos)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Todo>> {
        self.conn
            .query_row(&format!("SELECT {} FROM todos WHERE id = ?1", TODO_COLUMNS), params![id], todo_from_row)
            .optional()
            .map_err(Into::into)
    }

    /// The record with the highest id.
    pub fn newest(&mut self) -> Result<Option<Todo>> {
        self.conn
            .query_row(&format!("SELECT {} FROM todos ORDER BY id DESC LIMIT 1", TODO_COLUMNS), [], todo_from_row)
            .optional()
            .map_err(Into::into)
    }

    /// Replaces title, body, completion and due date of an existing record.
    pub fn update(&mut self, todo: &Todo) -> Result<()> {
        let affected = self
            .conn
            .execute(UPDATE_TODO, params![todo.id, todo.title, todo.body, todo.completed, todo.due_date])?;
        if affected == 0 {
            return Err(StoreError::NotFound(todo.id));
        }

        msg_debug!(Message::TodoReplaced(todo.id));
        Ok(())
    }

    /// Removes a record. A missing id is not an error; the return value tells
    /// whether a row was actually removed.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let affected = self.conn.execute(DELETE_TODO, params![id])?;
        if affected > 0 {
            msg_debug!(Message::TodoRemoved(id));
        }
        Ok(affected > 0)
    }

    /// Read-modify-write of the completion flag within one transaction.
    pub fn set_completed(&mut self, id: i64, completed: bool) -> Result<()> {
        let tx = self.conn.transaction()?;

        let exists = tx
            .query_row("SELECT 1 FROM todos WHERE id = ?1", params![id], |_| Ok(()))
            .optional()?
            .is_some();
        if !exists {
            return Err(StoreError::NotFound(id));
        }
        tx.execute(UPDATE_COMPLETED, params![id, completed])?;
        tx.commit()?;

        msg_debug!(Message::CompletionSet(id, completed));
        Ok(())
    }

    /// Deletes every completed record and returns how many were removed.
    pub fn delete_completed(&mut self) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let deleted = tx.execute(DELETE_COMPLETED, [])?;
        tx.commit()?;
        Ok(deleted)
    }

    pub fn count(&mut self, filter: TodoFilter) -> Result<usize> {
        self.count_at(filter, Utc::now())
    }

    /// Counts matches of `filter` against a fixed `now`.
    pub fn count_at(&mut self, filter: TodoFilter, now: DateTime<Utc>) -> Result<usize> {
        let matcher = Matcher::new(filter, "", now);
        let mut count = 0;
        self.scan(|todo| {
            if matcher.matches(&todo) {
                count += 1;
            }
        })?;
        Ok(count)
    }

    pub fn page(&mut self, query: &PageQuery) -> Result<Page> {
        self.page_at(query, Utc::now())
    }

    /// Builds one page from a single forward scan, classifying due dates
    /// against `now`.
    pub fn page_at(&mut self, query: &PageQuery, now: DateTime<Utc>) -> Result<Page> {
        let mut paginator = Paginator::new(query, now)?;
        self.scan(|todo| {
            paginator.push(todo);
        })?;
        let page = paginator.finish();

        msg_debug!(Message::PageScanned(page.total, page.todos.len()));
        Ok(page)
    }

    /// Feeds every row to `visit` in ascending id order, one row at a time.
    fn scan<F>(&mut self, mut visit: F) -> Result<()>
    where
        F: FnMut(Todo),
    {
        let mut stmt = self.conn.prepare(&format!("SELECT {} FROM todos ORDER BY id", TODO_COLUMNS))?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            visit(todo_from_row(row)?);
        }
        Ok(())
    }
}

fn todo_from_row(row: &Row) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        body: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        completed: row.get::<_, Option<bool>>(3)?.unwrap_or(false),
        created_date: row.get(4)?,
        due_date: row.get(5)?,
    })
}
