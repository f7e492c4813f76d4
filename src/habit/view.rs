//! Sorted, read-only snapshot of the collection with summary counts

use crate::habit::habit_data::HabitData;
use crate::habit::local_date::DayKey;
use crate::habit::record::Habit;
use crate::habit::sort::SortOrder;

/// A habit as presented, with its checked-today flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitEntry {
    pub habit: Habit,
    pub checked_today: bool,
}

/// Aggregate counts shown next to the list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub checked_today: usize,
    pub best_streak: u32,
    /// Share of habits checked today, rounded to a whole percent
    pub completion_percent: u32,
}

/// Read-only, sorted snapshot of the collection for one day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitView {
    pub today: DayKey,
    pub sort: SortOrder,
    pub entries: Vec<HabitEntry>,
    pub summary: Summary,
}

impl HabitView {
    /// Build the view using the stored sort preference
    pub fn build(data: &HabitData, today: &DayKey) -> Self {
        Self::build_with(data, today, data.preferences.sort)
    }

    pub fn build_with(data: &HabitData, today: &DayKey, sort: SortOrder) -> Self {
        let mut habits = data.habits().to_vec();
        sort.sort(&mut habits, today);
        let entries = habits
            .into_iter()
            .map(|habit| HabitEntry {
                checked_today: habit.is_checked_on(today),
                habit,
            })
            .collect();
        Self {
            today: today.clone(),
            sort,
            entries,
            summary: summarize(data.habits(), today),
        }
    }
}

/// Count totals for `habits` on `today`
pub fn summarize(habits: &[Habit], today: &DayKey) -> Summary {
    let total = habits.len();
    let checked_today = habits.iter().filter(|h| h.is_checked_on(today)).count();
    let best_streak = habits.iter().map(|h| h.best).max().unwrap_or(0);
    let completion_percent = if total == 0 {
        0
    } else {
        ((checked_today as f64 / total as f64) * 100.0).round() as u32
    };
    Summary {
        total,
        checked_today,
        best_streak,
        completion_percent,
    }
}
