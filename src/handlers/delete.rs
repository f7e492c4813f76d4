//! Delete and undo handlers for the habit MCP server

use crate::HabitServerHandler;
use crate::habit::UndoOutcome;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};
use tracing::info;

impl HabitServerHandler {
    /// Removes a habit and keeps it in the single-slot undo buffer.
    pub async fn handle_delete_habit(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_habit_id(&id);
        let now = self.today.now_millis();
        let window = self.config.undo_window_millis();
        let mut data = self.lock_data();

        let Some(removed) = data.delete(&id, now, window) else {
            return Ok(format!("Habit '{}' not found; nothing changed", id));
        };

        if let Err(e) = self.save_habits(&data) {
            bail_public!(_, "Failed to save: {}", e);
        }
        info!(%id, "habit deleted");

        Ok(format!(
            "Deleted '{}'. Call undo_delete within {} ms to restore it.",
            removed.name, self.config.undo_window_ms
        ))
    }

    /// Restores the most recently deleted habit if the undo window is still open.
    pub async fn handle_undo_delete(&self) -> McpResult<String> {
        let now = self.today.now_millis();
        let mut data = self.lock_data();

        let restored = match data.undo_delete(now) {
            UndoOutcome::Restored(habit) => habit,
            UndoOutcome::Expired => {
                return Ok("Undo window has expired; nothing restored".to_string());
            }
            UndoOutcome::NothingPending => return Ok("Nothing to undo".to_string()),
            UndoOutcome::Conflict => {
                return Ok(
                    "A habit with the same ID exists again; nothing restored".to_string(),
                );
            }
        };

        if let Err(e) = self.save_habits(&data) {
            bail_public!(_, "Failed to save: {}", e);
        }
        info!(id = %restored.id, "habit restored");

        Ok(format!("Restored '{}'", restored.name))
    }
}
