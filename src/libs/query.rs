//! Filter, search and pagination over a forward stream of records.
//!
//! The store feeds records one at a time from a cursor in ascending id order;
//! nothing here touches the database. Filtering and searching happen before
//! any pagination math, so `Page::total` is the post-filter cardinality.
//!
//! ## Pagination
//!
//! With `offset = (page - 1) * page_size`, the n-th match (0-based) is kept
//! when `offset <= n < offset + page_size`. After the scan:
//!
//! - `total` is the number of matches
//! - `has_next` is `total > offset + page_size`
//! - `has_previous` is `page > 1 && offset < total`
//!
//! ## Usage
//!
//! ```rust
//! use todox::libs::query::Paginator;
//! use todox::libs::todo::{PageQuery, TodoFilter};
//!
//! let query = PageQuery::new(1, 3, TodoFilter::All, "");
//! let paginator = Paginator::new(&query, chrono::Utc::now())?;
//! let page = paginator.finish();
//! assert_eq!(page.total, 0);
//! # Ok::<(), todox::libs::error::StoreError>(())
//! ```

use super::error::{Result, StoreError};
use super::todo::{Page, PageQuery, Todo, TodoFilter};
use chrono::{DateTime, Utc};

/// Combined completion/due date filter and title search.
///
/// `now` is fixed when the matcher is built so that one scan classifies
/// every record against the same instant.
#[derive(Debug, Clone)]
pub struct Matcher {
    filter: TodoFilter,
    needle: Option<String>,
    now: DateTime<Utc>,
}

impl Matcher {
    pub fn new(filter: TodoFilter, search: &str, now: DateTime<Utc>) -> Self {
        let needle = if search.trim().is_empty() { None } else { Some(search.to_lowercase()) };

        Matcher { filter, needle, now }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        self.filter.accepts(todo, self.now) && self.matches_title(&todo.title)
    }

    fn matches_title(&self, title: &str) -> bool {
        match &self.needle {
            Some(needle) => title.to_lowercase().contains(needle.as_str()),
            None => true,
        }
    }
}

/// Collects one page out of a stream of records.
#[derive(Debug)]
pub struct Paginator {
    matcher: Matcher,
    page: usize,
    page_size: usize,
    offset: usize,
    matched: usize,
    todos: Vec<Todo>,
}

impl Paginator {
    pub fn new(query: &PageQuery, now: DateTime<Utc>) -> Result<Self> {
        if query.page == 0 || query.page_size == 0 {
            return Err(StoreError::InvalidPage {
                page: query.page,
                page_size: query.page_size,
            });
        }

        Ok(Paginator {
            matcher: Matcher::new(query.filter, &query.search, now),
            page: query.page,
            page_size: query.page_size,
            offset: query.offset(),
            matched: 0,
            todos: Vec::new(),
        })
    }

    /// Offers the next record from the cursor.
    pub fn push(&mut self, todo: Todo) {
        if !self.matcher.matches(&todo) {
            return;
        }

        let position = self.matched;
        self.matched += 1;

        if position >= self.offset && position < self.page_end() && self.todos.len() < self.page_size {
            self.todos.push(todo);
        }
    }

    pub fn finish(self) -> Page {
        let page_end = self.page_end();
        Page {
            has_next: self.matched > page_end,
            has_previous: self.page > 1 && self.offset < self.matched,
            total: self.matched,
            todos: self.todos,
        }
    }

    fn page_end(&self) -> usize {
        self.offset.saturating_add(self.page_size)
    }
}

/// Runs a whole page request over an in-memory sequence.
pub fn paginate<I>(todos: I, query: &PageQuery, now: DateTime<Utc>) -> Result<Page>
where
    I: IntoIterator<Item = Todo>,
{
    let mut paginator = Paginator::new(query, now)?;
    for todo in todos {
        paginator.push(todo);
    }
    Ok(paginator.finish())
}
