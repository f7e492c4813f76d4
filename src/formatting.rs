//! Formatting helper functions for the habit MCP server
//!
//! Renders the sorted habit view and its summary counts as plain text.

use crate::habit::{HabitEntry, HabitView, Summary};

/// Format the summary line shown above the list
pub fn format_summary(summary: &Summary) -> String {
    format!(
        "Habits: {} | Checked today: {} | Best streak: {} | Done: {}%",
        summary.total, summary.checked_today, summary.best_streak, summary.completion_percent
    )
}

/// Format a single habit entry
///
/// # Returns
/// Two lines: the name with its ID and today's mark, then the counters
pub fn format_entry(entry: &HabitEntry) -> String {
    let habit = &entry.habit;
    let mark = if entry.checked_today { "x" } else { " " };
    let last = habit
        .last_check
        .as_ref()
        .map(|d| d.to_string())
        .unwrap_or_else(|| "—".to_string());
    format!(
        "- [{}] {} (id: {})\n  Streak: {} • Best: {} • Last: {}\n",
        mark, habit.name, habit.id, habit.streak, habit.best, last
    )
}

/// Format the whole view
pub fn format_view(view: &HabitView) -> String {
    let mut result = format!("Today: {}\n{}\n", view.today, format_summary(&view.summary));
    if view.entries.is_empty() {
        result.push_str("\nNo habits yet");
        return result;
    }

    result.push_str(&format!("Sorted by: {}\n\n", view.sort));
    for entry in &view.entries {
        result.push_str(&format_entry(entry));
    }
    result
}
