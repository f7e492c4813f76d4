//! Sort preference handler for the habit MCP server

use crate::HabitServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl HabitServerHandler {
    /// Saves the default sort order used by list_habits.
    pub async fn handle_set_sort(&self, sort: String) -> McpResult<String> {
        let order = validation::parse_sort_order(&sort)?;
        let mut data = self.lock_data();
        data.preferences.sort = order;

        if let Err(e) = self.save_preferences(&data) {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Sort order set to {}", order))
    }
}
