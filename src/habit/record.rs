//! The habit entity and name/id helpers

use crate::habit::local_date::DayKey;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Clean a user-supplied habit name
///
/// Control characters (line breaks, tabs) become spaces so the name stays
/// on one CSV line, then surrounding whitespace is trimmed.
///
/// # Returns
/// `None` when nothing but whitespace remains
pub fn clean_name(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let cleaned = cleaned.trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

/// Generate a fresh opaque habit identifier
pub fn new_habit_id() -> String {
    Uuid::new_v4().to_string()
}

/// A tracked habit
///
/// Stored as a JSON object with camelCase keys so documents written by
/// older versions of the tracker load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier, stable across edits
    pub id: String,
    /// Display name, never empty
    pub name: String,
    /// Current run of consecutive check-in days
    #[serde(default)]
    pub streak: u32,
    /// Highest streak ever reached
    #[serde(default)]
    pub best: u32,
    /// Day of the most recent check-in
    #[serde(default)]
    pub last_check: Option<DayKey>,
    /// Creation time in epoch milliseconds
    #[serde(default)]
    pub created_at: Option<i64>,
}

impl Habit {
    /// Create a habit with no check-ins
    pub fn new(id: impl Into<String>, name: impl Into<String>, created_at: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            streak: 0,
            best: 0,
            last_check: None,
            created_at: Some(created_at),
        }
    }

    /// Whether the habit was checked in on `today`
    pub fn is_checked_on(&self, today: &DayKey) -> bool {
        self.last_check.as_ref() == Some(today)
    }

    /// Creation time used for ordering, missing values count as oldest
    pub fn created_at_or_zero(&self) -> i64 {
        self.created_at.unwrap_or(0)
    }

    /// Restore the streak invariants on a record from an untrusted source
    ///
    /// A habit without a last check has no running streak, and `best`
    /// never trails `streak`.
    pub fn normalize(&mut self) {
        if self.last_check.is_none() {
            self.streak = 0;
        }
        self.best = self.best.max(self.streak);
    }
}
