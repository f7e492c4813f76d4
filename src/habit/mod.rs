//! Habit domain models and business logic
//!
//! Split into submodules:
//! - `local_date`: day keys, day arithmetic and the ambient "today"
//! - `record`: the habit entity
//! - `streak`: check-in, reset and rename transitions
//! - `sort`: sort orders and the preference document
//! - `habit_data`: the owned collection with delete/undo
//! - `view`: sorted snapshot and summary counts

mod habit_data;
mod local_date;
mod record;
mod sort;
mod streak;
mod view;

// Re-export all public types
pub use habit_data::{HabitData, UndoOutcome};
pub use local_date::{Clock, DayKey, ManualClock, SystemClock, TodayTracker, days_between};
pub use record::{Habit, clean_name, new_habit_id};
pub use sort::{Preferences, SortOrder};
pub use streak::{StreakUpdate, check_in, next_streak, rename, reset};
pub use view::{HabitEntry, HabitView, Summary, summarize};
