#[derive(Debug, Clone)]
pub enum Message {
    // === TODO MESSAGES ===
    TodoCreated(i64),
    TodoUpdated(i64),
    TodoDeleted(i64),
    TodoAlreadyAbsent(i64),
    TodoChecked(i64),
    TodoUnchecked(i64),
    TodoNotFound(i64),
    TodosNotFound,
    CompletedCleared(usize),
    NothingToClear,
    NothingToUpdate,
    EmptyTitle,
    InvalidDueDate(String),
    DueDateInPast,
    TodoCount(usize, String),           // count, filter
    PageSummary(usize, usize, usize),   // page, shown, total
    PageHint(usize),                    // next page number
    NewestTodoHeader,
    TodosHeader(String),                // filter

    // === STORE MESSAGES ===
    StoreOpening(String), // path
    StoreReady,
    StoreInitFailed(String),
    TodoInserted(i64),
    TodoReplaced(i64),
    TodoRemoved(i64),
    CompletionSet(i64, bool),
    PageScanned(usize, usize), // matched, kept

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    PromptPageSize,
    PromptDefaultFilter,
    PromptDatabasePath,
    InvalidPageSize,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseUpToDate,
}
