//! Sort orders and the persisted preference document

use crate::habit::local_date::DayKey;
use crate::habit::record::Habit;
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use std::fmt;
use std::str::FromStr;

/// Order in which habits are presented
///
/// Uses lowercase naming to match the stored preference document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Collection order, newest first
    #[default]
    Created,
    /// Alphabetical by name
    Name,
    /// Longest current streak first
    Streak,
    /// Most recent check-in first
    Last,
    /// Checked in today first, then by streak
    Today,
}

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Created,
        SortOrder::Name,
        SortOrder::Streak,
        SortOrder::Last,
        SortOrder::Today,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Created => "created",
            SortOrder::Name => "name",
            SortOrder::Streak => "streak",
            SortOrder::Last => "last",
            SortOrder::Today => "today",
        }
    }

    /// Compare two habits under this order
    ///
    /// `Created` treats every pair as equal so a stable sort keeps the
    /// collection order.
    pub fn compare(&self, a: &Habit, b: &Habit, today: &DayKey) -> Ordering {
        match self {
            SortOrder::Created => Ordering::Equal,
            SortOrder::Name => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
            SortOrder::Streak => b.streak.cmp(&a.streak),
            SortOrder::Last => last_check_str(b).cmp(last_check_str(a)),
            SortOrder::Today => Reverse(a.is_checked_on(today))
                .cmp(&Reverse(b.is_checked_on(today)))
                .then_with(|| b.streak.cmp(&a.streak)),
        }
    }

    /// Stable-sort `habits` in place
    pub fn sort(&self, habits: &mut [Habit], today: &DayKey) {
        habits.sort_by(|a, b| self.compare(a, b, today));
    }
}

fn last_check_str(habit: &Habit) -> &str {
    habit.last_check.as_ref().map(DayKey::as_str).unwrap_or("")
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "created" => Ok(SortOrder::Created),
            "name" => Ok(SortOrder::Name),
            "streak" => Ok(SortOrder::Streak),
            "last" => Ok(SortOrder::Last),
            "today" => Ok(SortOrder::Today),
            _ => Err(format!(
                "Invalid sort '{}'. Valid options are: created, name, streak, last, today",
                s
            )),
        }
    }
}

/// User preferences persisted alongside the habits
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub sort: SortOrder,
}
