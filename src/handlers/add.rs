//! Add handler for the habit MCP server

use crate::HabitServerHandler;
use mcp_attr::{Result as McpResult, bail_public};
use tracing::info;

impl HabitServerHandler {
    /// Creates a habit with a fresh ID at the front of the collection.
    /// A blank name creates nothing and is not an error.
    pub async fn handle_add_habit(&self, name: String) -> McpResult<String> {
        let mut data = self.lock_data();
        let now = self.today.now_millis();

        let (id, name) = match data.create(&name, now) {
            Some(habit) => (habit.id.clone(), habit.name.clone()),
            None => return Ok("Habit name is empty; nothing created".to_string()),
        };

        if let Err(e) = self.save_habits(&data) {
            bail_public!(_, "Failed to save: {}", e);
        }
        info!(%id, "habit created");

        Ok(format!("Habit created with ID: {} (name: {})", id, name))
    }
}
