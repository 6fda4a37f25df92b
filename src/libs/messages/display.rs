//! Display implementation for todox messages.
//!
//! Every user-facing string lives here, so the command layer and the store
//! only ever pass structured `Message` values around.
//!
//! ```rust
//! use todox::libs::messages::Message;
//!
//! assert_eq!(Message::TodoNotFound(7).to_string(), "Todo with ID 7 not found");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TODO MESSAGES ===
            Message::TodoCreated(id) => format!("Todo #{} created", id),
            Message::TodoUpdated(id) => format!("Todo #{} updated", id),
            Message::TodoDeleted(id) => format!("Todo #{} deleted", id),
            Message::TodoAlreadyAbsent(id) => format!("Todo #{} does not exist, nothing deleted", id),
            Message::TodoChecked(id) => format!("Todo #{} marked as done", id),
            Message::TodoUnchecked(id) => format!("Todo #{} marked as not done", id),
            Message::TodoNotFound(id) => format!("Todo with ID {} not found", id),
            Message::TodosNotFound => "No todos found".to_string(),
            Message::CompletedCleared(count) => format!("Removed {} completed todo(s)", count),
            Message::NothingToClear => "There are no completed todos to remove".to_string(),
            Message::NothingToUpdate => "Nothing to update: pass at least one of --title, --body or --due".to_string(),
            Message::EmptyTitle => "Title must not be empty".to_string(),
            Message::InvalidDueDate(input) => format!(
                "Invalid due date '{}'. Use RFC 3339, YYYY-MM-DD, YYYY-MM-DD HH:MM or an offset like +2d, +3h, +30m",
                input
            ),
            Message::DueDateInPast => "Due date cannot be in the past".to_string(),
            Message::TodoCount(count, filter) => format!("{} todo(s) matching '{}'", count, filter),
            Message::PageSummary(page, shown, total) => format!("Page {}: showing {} of {} matching todo(s)", page, shown, total),
            Message::PageHint(next) => format!("More results available, use --page {}", next),
            Message::NewestTodoHeader => "Newest todo".to_string(),
            Message::TodosHeader(filter) => format!("Todos ({})", filter),

            // === STORE MESSAGES ===
            Message::StoreOpening(path) => format!("Opening todo store at {}", path),
            Message::StoreReady => "Todo store is ready".to_string(),
            Message::StoreInitFailed(error) => format!("Failed to open todo store: {}", error),
            Message::TodoInserted(id) => format!("Inserted todo #{}", id),
            Message::TodoReplaced(id) => format!("Replaced todo #{}", id),
            Message::TodoRemoved(id) => format!("Removed todo #{}", id),
            Message::CompletionSet(id, value) => format!("Set completed = {} on todo #{}", value, id),
            Message::PageScanned(matched, kept) => format!("Scan matched {} todo(s), kept {} for the page", matched, kept),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::PromptPageSize => "Todos per page".to_string(),
            Message::PromptDefaultFilter => "Default filter".to_string(),
            Message::PromptDatabasePath => "Database file (leave empty for the default location)".to_string(),
            Message::InvalidPageSize => "Page size must be at least 1".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
        };

        write!(f, "{}", text)
    }
}
