#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};
    use todox::libs::error::StoreError;
    use todox::libs::store::{StoreConfig, TodoStore};
    use todox::libs::todo::{NewTodo, PageQuery, TodoFilter};

    const FILTERS: [TodoFilter; 4] = [TodoFilter::All, TodoFilter::Open, TodoFilter::Done, TodoFilter::Expired];

    /// A store backed by a database file in a temporary directory.
    struct StoreTestContext {
        _temp_dir: TempDir,
        store: TodoStore,
    }

    impl AsyncTestContext for StoreTestContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = TodoStore::connect(StoreConfig::file(temp_dir.path().join("todox.db"))).await.unwrap();
            StoreTestContext {
                _temp_dir: temp_dir,
                store,
            }
        }
    }

    impl StoreTestContext {
        /// The seven records of the mixed filter scenario.
        async fn load_sample(&self) {
            let now = Utc::now();
            let tomorrow = now + Duration::days(1);
            let yesterday = now - Duration::days(1);
            let samples = [
                ("Active Alpha 1", false, tomorrow),
                ("Completed Alpha 2", true, tomorrow),
                ("Active Bravo 3", false, tomorrow),
                ("Expired Charlie 4", false, yesterday),
                ("Completed Bravo 5", true, yesterday),
                ("Active Alpha 6 (Past Due)", false, yesterday),
                ("Future Task 7", false, now + Duration::days(5)),
            ];
            for (title, completed, due) in samples {
                self.store.add(NewTodo::new(title, "Test todo", due).completed(completed)).await.unwrap();
            }
        }

        async fn titles(&self, filter: TodoFilter, search: &str) -> Vec<String> {
            let page = self.store.get_page(PageQuery::new(1, 100, filter, search)).await.unwrap();
            page.todos.into_iter().map(|t| t.title).collect()
        }
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_add_then_newest_returns_record(ctx: &mut StoreTestContext) {
        let mut previous_ids = Vec::new();
        for i in 0..3 {
            let due = Utc::now() + Duration::hours(i);
            let new_todo = NewTodo::new(&format!("Todo {}", i), "Body", due).completed(i % 2 == 1);
            let id = ctx.store.add(new_todo.clone()).await.unwrap();

            let newest = ctx.store.newest().await.unwrap().unwrap();
            assert_eq!(newest.id, id);
            assert_eq!(newest.title, new_todo.title);
            assert_eq!(newest.body, new_todo.body);
            assert_eq!(newest.completed, new_todo.completed);
            assert_eq!(newest.due_date, new_todo.due_date);
            assert!(previous_ids.iter().all(|previous| id > *previous));
            previous_ids.push(id);
        }
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_three_record_filter_scenario(ctx: &mut StoreTestContext) {
        let now = Utc::now();
        let tomorrow = now + Duration::days(1);
        let yesterday = now - Duration::days(1);
        ctx.store.add(NewTodo::new("Active Alpha", "", tomorrow)).await.unwrap();
        ctx.store.add(NewTodo::new("Completed Alpha", "", tomorrow).completed(true)).await.unwrap();
        ctx.store.add(NewTodo::new("Expired Charlie", "", yesterday)).await.unwrap();

        assert_eq!(ctx.titles(TodoFilter::Open, "").await, vec!["Active Alpha"]);
        assert_eq!(ctx.titles(TodoFilter::Done, "").await, vec!["Completed Alpha"]);
        assert_eq!(ctx.titles(TodoFilter::Expired, "").await, vec!["Expired Charlie"]);
        assert_eq!(ctx.titles(TodoFilter::All, "alpha").await, vec!["Active Alpha", "Completed Alpha"]);
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_filters_over_mixed_sample(ctx: &mut StoreTestContext) {
        ctx.load_sample().await;

        let all = ctx.store.get_page(PageQuery::new(1, 10, TodoFilter::All, "")).await.unwrap();
        assert_eq!(all.todos.len(), 7);
        assert_eq!(all.total, 7);

        assert_eq!(ctx.titles(TodoFilter::Open, "").await, vec!["Active Alpha 1", "Active Bravo 3", "Future Task 7"]);
        assert_eq!(ctx.titles(TodoFilter::Done, "").await, vec!["Completed Alpha 2", "Completed Bravo 5"]);
        assert_eq!(ctx.titles(TodoFilter::Expired, "").await, vec!["Expired Charlie 4", "Active Alpha 6 (Past Due)"]);
        assert_eq!(
            ctx.titles(TodoFilter::All, "alpha").await,
            vec!["Active Alpha 1", "Completed Alpha 2", "Active Alpha 6 (Past Due)"]
        );
        assert_eq!(ctx.titles(TodoFilter::Open, "ACTIVE").await, vec!["Active Alpha 1", "Active Bravo 3"]);
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_search_matching_nothing(ctx: &mut StoreTestContext) {
        ctx.load_sample().await;

        let page = ctx.store.get_page(PageQuery::new(1, 10, TodoFilter::All, "NonExistentSearchTerm")).await.unwrap();
        assert!(page.todos.is_empty());
        assert_eq!(page.total, 0);
        assert!(!page.has_next);
        assert!(!page.has_previous);
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_empty_store_page(ctx: &mut StoreTestContext) {
        let page = ctx.store.get_page(PageQuery::new(1, 10, TodoFilter::All, "")).await.unwrap();

        assert!(page.todos.is_empty());
        assert_eq!(page.total, 0);
        assert!(!page.has_next);
        assert!(!page.has_previous);
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_pagination_seven_records(ctx: &mut StoreTestContext) {
        ctx.load_sample().await;

        let page = ctx.store.get_page(PageQuery::new(1, 3, TodoFilter::All, "")).await.unwrap();
        assert_eq!((page.todos.len(), page.total, page.has_previous, page.has_next), (3, 7, false, true));

        let page = ctx.store.get_page(PageQuery::new(2, 3, TodoFilter::All, "")).await.unwrap();
        assert_eq!((page.todos.len(), page.total, page.has_previous, page.has_next), (3, 7, true, true));

        let page = ctx.store.get_page(PageQuery::new(3, 3, TodoFilter::All, "")).await.unwrap();
        assert_eq!((page.todos.len(), page.total, page.has_previous, page.has_next), (1, 7, true, false));
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_pages_reconstruct_match_set(ctx: &mut StoreTestContext) {
        ctx.load_sample().await;

        for filter in FILTERS {
            for search in ["", "alpha", "a"] {
                let expected = ctx.titles(filter, search).await;
                for page_size in 1..=4 {
                    let mut collected = Vec::new();
                    let mut page_number = 1;
                    loop {
                        let query = PageQuery::new(page_number, page_size, filter, search);
                        let page = ctx.store.get_page(query).await.unwrap();
                        assert_eq!(page.total, expected.len());
                        collected.extend(page.todos.into_iter().map(|t| t.title));
                        if !page.has_next {
                            break;
                        }
                        page_number += 1;
                    }
                    assert_eq!(collected, expected, "filter {}, search '{}', page size {}", filter, search, page_size);
                }
            }
        }
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_count_agrees_with_paged_query(ctx: &mut StoreTestContext) {
        ctx.load_sample().await;

        for filter in FILTERS {
            let count = ctx.store.count(filter).await.unwrap();
            let page = ctx.store.get_page(PageQuery::new(1, usize::MAX, filter, "")).await.unwrap();
            assert_eq!(count, page.todos.len(), "filter {}", filter);
            assert_eq!(count, page.total, "filter {}", filter);
        }
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_delete_twice(ctx: &mut StoreTestContext) {
        ctx.store.add(NewTodo::new("Todo 1", "", Utc::now())).await.unwrap();
        let id = ctx.store.add(NewTodo::new("Todo 2", "", Utc::now())).await.unwrap();
        assert_eq!(ctx.store.count(TodoFilter::All).await.unwrap(), 2);

        assert!(ctx.store.delete(id).await.unwrap());
        assert_eq!(ctx.store.count(TodoFilter::All).await.unwrap(), 1);

        assert!(!ctx.store.delete(id).await.unwrap());
        assert_eq!(ctx.store.count(TodoFilter::All).await.unwrap(), 1);

        assert!(!ctx.store.delete(999).await.unwrap());
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_toggle_completion(ctx: &mut StoreTestContext) {
        let id = ctx.store.add(NewTodo::new("Todo to toggle", "", Utc::now() + Duration::days(1))).await.unwrap();

        ctx.store.toggle_completion(id, true).await.unwrap();
        let page = ctx.store.get_page(PageQuery::new(1, 1, TodoFilter::All, "Todo to toggle")).await.unwrap();
        assert!(page.todos[0].completed);

        ctx.store.toggle_completion(id, false).await.unwrap();
        assert!(!ctx.store.get(id).await.unwrap().unwrap().completed);
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_toggle_missing_todo_reports_not_found(ctx: &mut StoreTestContext) {
        let err = ctx.store.toggle_completion(999, true).await.unwrap_err();

        assert!(matches!(err, StoreError::NotFound(999)));
        assert_eq!(err.to_string(), "Todo with ID 999 not found");
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_update_missing_todo_reports_not_found(ctx: &mut StoreTestContext) {
        let id = ctx.store.add(NewTodo::new("Removed", "", Utc::now())).await.unwrap();
        let todo = ctx.store.get(id).await.unwrap().unwrap();
        ctx.store.delete(id).await.unwrap();

        assert!(matches!(ctx.store.update(todo).await, Err(StoreError::NotFound(missing)) if missing == id));
        assert_eq!(ctx.store.count(TodoFilter::All).await.unwrap(), 0);
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_clear_completed(ctx: &mut StoreTestContext) {
        ctx.load_sample().await;

        assert_eq!(ctx.store.clear_completed().await.unwrap(), 2);
        assert_eq!(ctx.store.count(TodoFilter::Done).await.unwrap(), 0);
        assert_eq!(ctx.store.count(TodoFilter::All).await.unwrap(), 5);
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_invalid_page_request(ctx: &mut StoreTestContext) {
        let result = ctx.store.get_page(PageQuery::new(0, 10, TodoFilter::All, "")).await;
        assert!(matches!(result, Err(StoreError::InvalidPage { page: 0, page_size: 10 })));
    }

    #[test_context(StoreTestContext)]
    #[tokio::test]
    async fn test_get_all_matches_page_order(ctx: &mut StoreTestContext) {
        ctx.load_sample().await;

        let all = ctx.store.get_all().await.unwrap();
        let page = ctx.store.get_page(PageQuery::new(1, usize::MAX, TodoFilter::All, "")).await.unwrap();
        assert_eq!(all, page.todos);
        assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_every_operation() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::file(temp_dir.path().join("no-such-dir").join("todox.db"));

        assert!(matches!(TodoStore::connect(config.clone()).await, Err(StoreError::StoreUnavailable(_))));

        let store = TodoStore::open(config);
        assert!(matches!(store.add(NewTodo::new("Lost", "", Utc::now())).await, Err(StoreError::StoreUnavailable(_))));
        assert!(matches!(store.get_all().await, Err(StoreError::StoreUnavailable(_))));
        assert!(matches!(store.delete(1).await, Err(StoreError::StoreUnavailable(_))));
        assert!(matches!(store.ready().await, Err(StoreError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn test_data_survives_reopen() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("todox.db");
        let due = Utc::now() + Duration::days(3);

        let id = {
            let store = TodoStore::connect(StoreConfig::file(&path)).await.unwrap();
            store.add(NewTodo::new("Persisted", "Still here", due)).await.unwrap()
        };

        let store = TodoStore::connect(StoreConfig::file(&path)).await.unwrap();
        let todo = store.get(id).await.unwrap().unwrap();
        assert_eq!(todo.title, "Persisted");
        assert_eq!(todo.body, "Still here");
        assert_eq!(todo.due_date, due);
    }
}
