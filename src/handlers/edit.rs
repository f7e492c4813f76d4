//! Rename and reset handlers for the habit MCP server

use crate::HabitServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};
use tracing::info;

impl HabitServerHandler {
    /// Renames a habit. A blank name or an unknown ID changes nothing.
    pub async fn handle_rename_habit(&self, id: String, name: String) -> McpResult<String> {
        let id = validation::normalize_habit_id(&id);
        let mut data = self.lock_data();

        match data.rename(&id, &name) {
            None => return Ok(format!("Habit '{}' not found; nothing changed", id)),
            Some(false) => return Ok("Habit name is empty; nothing changed".to_string()),
            Some(true) => {}
        }
        let name = data
            .find_by_id(&id)
            .map(|h| h.name.clone())
            .unwrap_or_default();

        if let Err(e) = self.save_habits(&data) {
            bail_public!(_, "Failed to save: {}", e);
        }
        info!(%id, "habit renamed");

        Ok(format!("Habit {} renamed to '{}'", id, name))
    }

    /// Clears the running streak and last check-in; best is kept.
    pub async fn handle_reset_habit(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_habit_id(&id);
        let mut data = self.lock_data();

        if !data.reset(&id) {
            return Ok(format!("Habit '{}' not found; nothing changed", id));
        }

        if let Err(e) = self.save_habits(&data) {
            bail_public!(_, "Failed to save: {}", e);
        }
        info!(%id, "streak reset");

        let (name, best) = data
            .find_by_id(&id)
            .map(|h| (h.name.clone(), h.best))
            .unwrap_or_default();
        Ok(format!("Streak of '{}' reset (best stays {})", name, best))
    }
}
