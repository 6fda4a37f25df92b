#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todox::db::db::Db;
    use todox::db::todos::Todos;
    use todox::libs::error::StoreError;
    use todox::libs::todo::{NewTodo, TodoFilter};

    struct TodoTestContext {
        _temp_dir: TempDir,
        todos: Todos,
    }

    impl TestContext for TodoTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(&temp_dir.path().join("todox.db")).unwrap();
            TodoTestContext {
                _temp_dir: temp_dir,
                todos: Todos::from_db(db),
            }
        }
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_todo_insert_and_fetch(ctx: &mut TodoTestContext) {
        let due = Utc::now() + Duration::days(2);
        let before = Utc::now();
        let id = ctx.todos.insert(&NewTodo::new("Write tests", "For the store", due)).unwrap();

        let all = ctx.todos.fetch_all().unwrap();
        assert_eq!(all.len(), 1);
        let todo = &all[0];
        assert_eq!(todo.id, id);
        assert_eq!(todo.title, "Write tests");
        assert_eq!(todo.body, "For the store");
        assert!(!todo.completed);
        assert_eq!(todo.due_date, due);
        assert!(todo.created_date >= before);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_fetch_all_in_creation_order(ctx: &mut TodoTestContext) {
        let due = Utc::now();
        for i in 1..=5 {
            ctx.todos.insert(&NewTodo::new(&format!("Todo {}", i), "", due)).unwrap();
        }

        let titles: Vec<String> = ctx.todos.fetch_all().unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Todo 1", "Todo 2", "Todo 3", "Todo 4", "Todo 5"]);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_todo_update(ctx: &mut TodoTestContext) {
        let id = ctx.todos.insert(&NewTodo::new("Original title", "Original body", Utc::now())).unwrap();
        let mut todo = ctx.todos.get_by_id(id).unwrap().unwrap();
        let created = todo.created_date;

        todo.title = "Updated title".to_string();
        todo.body = "Updated body".to_string();
        todo.completed = true;
        todo.due_date = Utc::now() + Duration::days(7);
        todo.created_date = Utc::now() + Duration::days(100);
        ctx.todos.update(&todo).unwrap();

        let updated = ctx.todos.get_by_id(id).unwrap().unwrap();
        assert_eq!(updated.title, "Updated title");
        assert_eq!(updated.body, "Updated body");
        assert!(updated.completed);
        assert_eq!(updated.due_date, todo.due_date);
        // The created date is never rewritten.
        assert_eq!(updated.created_date, created);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_update_missing_todo_reports_not_found(ctx: &mut TodoTestContext) {
        let id = ctx.todos.insert(&NewTodo::new("Ghost", "", Utc::now())).unwrap();
        let mut todo = ctx.todos.get_by_id(id).unwrap().unwrap();
        ctx.todos.delete(id).unwrap();

        todo.title = "Never stored".to_string();
        assert!(matches!(ctx.todos.update(&todo), Err(StoreError::NotFound(missing)) if missing == id));
        assert!(ctx.todos.fetch_all().unwrap().is_empty());
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_todo_delete_is_idempotent(ctx: &mut TodoTestContext) {
        let keep = ctx.todos.insert(&NewTodo::new("Keep", "", Utc::now())).unwrap();
        let id = ctx.todos.insert(&NewTodo::new("Delete me", "", Utc::now())).unwrap();

        assert!(ctx.todos.delete(id).unwrap());
        assert_eq!(ctx.todos.count(TodoFilter::All).unwrap(), 1);

        assert!(!ctx.todos.delete(id).unwrap());
        assert_eq!(ctx.todos.count(TodoFilter::All).unwrap(), 1);
        assert!(ctx.todos.get_by_id(keep).unwrap().is_some());
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_set_completed_changes_only_the_flag(ctx: &mut TodoTestContext) {
        let id = ctx.todos.insert(&NewTodo::new("Toggle", "Body", Utc::now())).unwrap();
        let before = ctx.todos.get_by_id(id).unwrap().unwrap();

        ctx.todos.set_completed(id, true).unwrap();
        let after = ctx.todos.get_by_id(id).unwrap().unwrap();
        assert!(after.completed);
        assert_eq!(after.title, before.title);
        assert_eq!(after.body, before.body);
        assert_eq!(after.due_date, before.due_date);
        assert_eq!(after.created_date, before.created_date);

        ctx.todos.set_completed(id, false).unwrap();
        assert!(!ctx.todos.get_by_id(id).unwrap().unwrap().completed);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_delete_completed(ctx: &mut TodoTestContext) {
        let due = Utc::now() + Duration::days(1);
        ctx.todos.insert(&NewTodo::new("Completed Todo 1", "", due).completed(true)).unwrap();
        ctx.todos.insert(&NewTodo::new("Active Todo 1", "", due)).unwrap();
        ctx.todos.insert(&NewTodo::new("Completed Todo 2", "", due).completed(true)).unwrap();

        assert_eq!(ctx.todos.delete_completed().unwrap(), 2);
        assert_eq!(ctx.todos.delete_completed().unwrap(), 0);

        let remaining = ctx.todos.fetch_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].title, "Active Todo 1");
        assert_eq!(ctx.todos.count(TodoFilter::Done).unwrap(), 0);
        assert_eq!(ctx.todos.count(TodoFilter::Open).unwrap(), 1);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_newest_on_empty_table(ctx: &mut TodoTestContext) {
        assert!(ctx.todos.newest().unwrap().is_none());
    }
}
