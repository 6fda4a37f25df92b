//! Task record model, listing filters and page types.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A persisted task record.
///
/// `id` and `created_date` are assigned by the store; everything else is
/// owned by the caller and replaced as a whole on update.
#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub completed: bool,
    pub created_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
}

impl Todo {
    /// Classifies the record against `now` for display purposes.
    pub fn status(&self, now: DateTime<Utc>) -> TodoFilter {
        if self.completed {
            TodoFilter::Done
        } else if self.due_date > now {
            TodoFilter::Open
        } else {
            TodoFilter::Expired
        }
    }
}

/// A record that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTodo {
    pub title: String,
    pub body: String,
    pub completed: bool,
    pub due_date: DateTime<Utc>,
}

impl NewTodo {
    pub fn new(title: &str, body: &str, due_date: DateTime<Utc>) -> Self {
        NewTodo {
            title: title.to_string(),
            body: body.to_string(),
            completed: false,
            due_date,
        }
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// Completion/due date filter applied by listings and counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoFilter {
    /// Every record.
    #[default]
    All,
    /// Not completed and due strictly after now.
    Open,
    /// Not completed and due at or before now.
    Expired,
    /// Completed, regardless of due date.
    Done,
}

impl TodoFilter {
    pub fn accepts(&self, todo: &Todo, now: DateTime<Utc>) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Open => !todo.completed && todo.due_date > now,
            TodoFilter::Expired => !todo.completed && todo.due_date <= now,
            TodoFilter::Done => todo.completed,
        }
    }
}

impl fmt::Display for TodoFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TodoFilter::All => "all",
            TodoFilter::Open => "open",
            TodoFilter::Expired => "expired",
            TodoFilter::Done => "done",
        };
        write!(f, "{}", name)
    }
}

/// A request for one page of the filtered and searched match sequence.
///
/// `page` is 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct PageQuery {
    pub page: usize,
    pub page_size: usize,
    pub filter: TodoFilter,
    pub search: String,
}

impl PageQuery {
    pub fn new(page: usize, page_size: usize, filter: TodoFilter, search: &str) -> Self {
        PageQuery {
            page,
            page_size,
            filter,
            search: search.to_string(),
        }
    }

    /// Number of matches that precede this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }
}

/// One page of matches plus the post-filter cardinality.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub todos: Vec<Todo>,
    pub total: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn todo(completed: bool, due_date: DateTime<Utc>) -> Todo {
        Todo {
            id: 1,
            title: "Sample".to_string(),
            body: String::new(),
            completed,
            created_date: due_date,
            due_date,
        }
    }

    #[test]
    fn test_filter_boundary_at_now_is_expired() {
        let now = Utc::now();
        let due_now = todo(false, now);

        assert!(TodoFilter::Expired.accepts(&due_now, now));
        assert!(!TodoFilter::Open.accepts(&due_now, now));
    }

    #[test]
    fn test_done_ignores_due_date() {
        let now = Utc::now();

        assert!(TodoFilter::Done.accepts(&todo(true, now - Duration::days(3)), now));
        assert!(TodoFilter::Done.accepts(&todo(true, now + Duration::days(3)), now));
        assert!(!TodoFilter::Open.accepts(&todo(true, now + Duration::days(3)), now));
        assert!(!TodoFilter::Expired.accepts(&todo(true, now - Duration::days(3)), now));
    }

    #[test]
    fn test_status_matches_filters() {
        let now = Utc::now();

        assert_eq!(todo(false, now + Duration::hours(1)).status(now), TodoFilter::Open);
        assert_eq!(todo(false, now - Duration::hours(1)).status(now), TodoFilter::Expired);
        assert_eq!(todo(true, now - Duration::hours(1)).status(now), TodoFilter::Done);
    }

    #[test]
    fn test_offset_saturates() {
        assert_eq!(PageQuery::new(1, 10, TodoFilter::All, "").offset(), 0);
        assert_eq!(PageQuery::new(3, 10, TodoFilter::All, "").offset(), 20);
        assert_eq!(PageQuery::new(2, usize::MAX, TodoFilter::All, "").offset(), usize::MAX);
    }
}
