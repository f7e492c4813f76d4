//! Streak transitions
//!
//! Check-in, reset and rename are the only ways a habit's fields change
//! outside of import. The arithmetic lives in [`next_streak`] so it can be
//! exercised without building a habit.

use crate::habit::local_date::{DayKey, days_between};
use crate::habit::record::{Habit, clean_name};
use tracing::debug;

/// Streak counters after a check-in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakUpdate {
    pub streak: u32,
    pub best: u32,
}

/// Compute the counters produced by checking in on `today`
///
/// # Returns
/// `None` when `last_check` is already `today` (the check-in is a no-op)
pub fn next_streak(
    streak: u32,
    best: u32,
    last_check: Option<&DayKey>,
    today: &DayKey,
) -> Option<StreakUpdate> {
    let streak = match last_check {
        Some(last) if last == today => return None,
        None => 1,
        Some(last) => match days_between(last, today) {
            Some(1) => streak.saturating_add(1),
            gap => {
                if gap.is_none_or(|g| g < 0) {
                    debug!(
                        last = %last,
                        today = %today,
                        ?gap,
                        "check-in before last check or unreadable date, streak restarts"
                    );
                }
                1
            }
        },
    };
    Some(StreakUpdate {
        streak,
        best: best.max(streak),
    })
}

/// Record a check-in for `today`
///
/// # Returns
/// `true` if the habit changed
pub fn check_in(habit: &mut Habit, today: &DayKey) -> bool {
    match next_streak(habit.streak, habit.best, habit.last_check.as_ref(), today) {
        Some(update) => {
            habit.streak = update.streak;
            habit.best = update.best;
            habit.last_check = Some(today.clone());
            true
        }
        None => false,
    }
}

/// Clear the running streak, keeping the best
pub fn reset(habit: &mut Habit) {
    habit.streak = 0;
    habit.last_check = None;
}

/// Replace the habit's name
///
/// # Returns
/// `false` (and no change) when the cleaned name is empty
pub fn rename(habit: &mut Habit, name: &str) -> bool {
    match clean_name(name) {
        Some(name) => {
            habit.name = name;
            true
        }
        None => false,
    }
}
