//! Check-in handler for the habit MCP server

use crate::HabitServerHandler;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};
use tracing::info;

impl HabitServerHandler {
    /// Records today's check-in. Unknown IDs and repeat check-ins on the
    /// same day leave everything unchanged.
    pub async fn handle_check_in(&self, id: String) -> McpResult<String> {
        let id = validation::normalize_habit_id(&id);
        let today = self.today.today();
        let mut data = self.lock_data();

        match data.check_in(&id, &today) {
            None => return Ok(format!("Habit '{}' not found; nothing changed", id)),
            Some(false) => {
                let name = data
                    .find_by_id(&id)
                    .map(|h| h.name.clone())
                    .unwrap_or_default();
                return Ok(format!("'{}' is already checked in for {}", name, today));
            }
            Some(true) => {}
        }

        if let Err(e) = self.save_habits(&data) {
            bail_public!(_, "Failed to save: {}", e);
        }

        let Some(habit) = data.find_by_id(&id) else {
            bail_public!(_, "Habit '{}' disappeared during check-in", id);
        };
        info!(%id, streak = habit.streak, best = habit.best, "checked in");
        Ok(format!(
            "Checked in '{}' for {}: streak {}, best {}",
            habit.name, today, habit.streak, habit.best
        ))
    }
}
