//! Habit MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for personal
//! habit tracking. Users create named habits and check in once per day; each
//! habit keeps a running streak of consecutive days and the best streak ever
//! reached. The collection can be backed up to and restored from CSV.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `HabitServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `habit`, `csv_codec` and `import` modules - streaks,
//!   day arithmetic, the habit collection, CSV backup and merge
//! - **Persistence Layer**: `storage` module - whole-document JSON snapshots
//!   in a key-value store backed by a TOML file
//!
//! # Example
//!
//! ```no_run
//! use habit_mcp::{HabitConfig, HabitServerHandler};
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = HabitServerHandler::new("habits.toml", HabitConfig::default())?;
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod csv_codec;
pub mod formatting;
pub mod habit;
pub mod handlers;
pub mod import;
pub mod logging;
pub mod rollover;
pub mod storage;
pub mod validation;

use anyhow::Result;
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// Re-export commonly used types
pub use config::HabitConfig;
pub use habit::{
    Clock, DayKey, Habit, HabitData, HabitView, ManualClock, Preferences, SortOrder, SystemClock,
    TodayTracker, UndoOutcome,
};
pub use import::ImportOutcome;
pub use storage::Storage;

/// MCP Server handler for habit tracking
///
/// Owns the habit collection and the shared "today" reference. Every
/// mutating tool runs to completion under the collection lock and writes the
/// whole collection back to storage before returning.
pub struct HabitServerHandler {
    pub(crate) data: Mutex<HabitData>,
    pub(crate) storage: Storage,
    pub(crate) today: Arc<TodayTracker>,
    pub(crate) config: HabitConfig,
}

impl HabitServerHandler {
    /// Create a new habit server handler
    ///
    /// # Arguments
    /// * `storage_path` - Path to the data file (TOML key-value file)
    /// * `config` - Runtime configuration
    ///
    /// # Returns
    /// Result containing the handler or an error
    ///
    /// # Example
    /// ```no_run
    /// # use habit_mcp::{HabitConfig, HabitServerHandler};
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let handler = HabitServerHandler::new("habits.toml", HabitConfig::default())?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(storage_path: &str, config: HabitConfig) -> Result<Self> {
        let today = Arc::new(TodayTracker::new(Arc::new(SystemClock)));
        Self::with_parts(Storage::file(storage_path), today, config)
    }

    /// Create a handler from explicit collaborators
    pub fn with_parts(
        storage: Storage,
        today: Arc<TodayTracker>,
        config: HabitConfig,
    ) -> Result<Self> {
        let data = Mutex::new(storage.load()?);
        Ok(Self {
            data,
            storage,
            today,
            config,
        })
    }

    /// Shared "today" reference, for the rollover task
    pub fn today_tracker(&self) -> Arc<TodayTracker> {
        Arc::clone(&self.today)
    }

    /// Re-derive today's key; see [`TodayTracker::sync`]
    pub fn sync_today(&self) -> bool {
        self.today.sync()
    }

    /// Sorted snapshot of the collection for today
    pub fn view(&self) -> HabitView {
        let data = self.lock_data();
        HabitView::build(&data, &self.today.today())
    }

    /// Copy of the current habits in collection order
    pub fn habits(&self) -> Vec<Habit> {
        self.lock_data().habits().to_vec()
    }

    pub(crate) fn lock_data(&self) -> MutexGuard<'_, HabitData> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Persist the habit collection
    pub(crate) fn save_habits(&self, data: &HabitData) -> Result<()> {
        self.storage.save_habits(data)
    }

    /// Persist the preferences
    pub(crate) fn save_preferences(&self, data: &HabitData) -> Result<()> {
        self.storage.save_preferences(&data.preferences)
    }
}

/// Habit tracker: build daily habits and keep streaks going.
///
/// Each habit has a name, a current streak (consecutive days checked in), the
/// best streak ever reached, and the day it was last checked in. Check in at
/// most once per day; checking in the day after the last check-in extends
/// the streak, any longer gap starts a new streak at 1.
///
/// Key concepts:
/// - **check_in**: mark a habit done today
/// - **reset_habit**: clear the running streak, best is kept
/// - **delete_habit**/**undo_delete**: deletes can be undone for a few seconds
/// - **export_csv**/**import_csv**: CSV backup; import merges by habit ID
///
/// Habit IDs are generated on creation and shown by list_habits.
#[mcp_server]
impl McpServer for HabitServerHandler {
    /// **Create**: Start tracking a new habit. New habits appear first in the default order.
    #[tool]
    async fn add_habit(
        &self,
        /// Name: what the habit is (e.g., "Read 20 pages")
        name: String,
    ) -> McpResult<String> {
        self.handle_add_habit(name).await
    }

    /// **Review**: Show all habits with today's progress, streaks and IDs.
    /// **Sort**: created/name/streak/last/today. Empty=saved preference.
    #[tool]
    async fn list_habits(
        &self,
        /// Sort order for this listing only (optional)
        sort: Option<String>,
    ) -> McpResult<String> {
        self.handle_list_habits(sort).await
    }

    /// **Check in**: Mark a habit done today. Checking in twice on the same day changes nothing.
    #[tool]
    async fn check_in(
        &self,
        /// ID of the habit
        id: String,
    ) -> McpResult<String> {
        self.handle_check_in(id).await
    }

    /// **Rename**: Change a habit's name. Streaks are not affected.
    #[tool]
    async fn rename_habit(
        &self,
        /// ID of the habit
        id: String,
        /// New name
        name: String,
    ) -> McpResult<String> {
        self.handle_rename_habit(id, name).await
    }

    /// **Reset**: Set the running streak back to 0. The best streak is kept.
    #[tool]
    async fn reset_habit(
        &self,
        /// ID of the habit
        id: String,
    ) -> McpResult<String> {
        self.handle_reset_habit(id).await
    }

    /// **Delete**: Remove a habit. Call undo_delete shortly after to restore it.
    #[tool]
    async fn delete_habit(
        &self,
        /// ID of the habit
        id: String,
    ) -> McpResult<String> {
        self.handle_delete_habit(id).await
    }

    /// **Undo**: Restore the most recently deleted habit at its old position, if still within the undo window.
    #[tool]
    async fn undo_delete(&self) -> McpResult<String> {
        self.handle_undo_delete().await
    }

    /// **Preference**: Save the default sort order: created/name/streak/last/today.
    #[tool]
    async fn set_sort(
        &self,
        /// Sort order: created/name/streak/last/today
        sort: String,
    ) -> McpResult<String> {
        self.handle_set_sort(sort).await
    }

    /// **Backup**: Export all habits as CSV (id,name,streak,best,lastCheck,createdAt).
    /// **Tip**: Give a directory to write habits-backup-<today>.csv there; otherwise the CSV is returned.
    #[tool]
    async fn export_csv(
        &self,
        /// Directory to write the backup file into (optional)
        directory: Option<String>,
    ) -> McpResult<String> {
        self.handle_export_csv(directory).await
    }

    /// **Restore**: Import habits from CSV produced by export_csv. Habits with a known ID are overwritten, new IDs are added.
    #[tool]
    async fn import_csv(
        &self,
        /// CSV text (optional if path is given)
        csv: Option<String>,
        /// Path to a CSV file (optional if csv is given)
        path: Option<String>,
    ) -> McpResult<String> {
        self.handle_import_csv(csv, path).await
    }
}
