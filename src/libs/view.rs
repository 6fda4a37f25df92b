use super::formatter::format_timestamp;
use super::todo::{Page, Todo};
use chrono::{DateTime, Utc};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn todos(todos: &[Todo], now: DateTime<Utc>) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TITLE", "BODY", "STATUS", "DUE", "CREATED"]);
        for todo in todos {
            table.add_row(row![
                todo.id,
                todo.title,
                todo.body,
                todo.status(now),
                format_timestamp(&todo.due_date),
                format_timestamp(&todo.created_date)
            ]);
        }
        table.printstd();
    }

    pub fn page(page: &Page, now: DateTime<Utc>) {
        Self::todos(&page.todos, now);
    }

    pub fn todo(todo: &Todo, now: DateTime<Utc>) {
        Self::todos(std::slice::from_ref(todo), now);
    }
}
