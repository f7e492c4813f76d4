//! Owned habit collection
//!
//! Create, look up, mutate by id, and delete with a single-slot undo.

use crate::habit::local_date::DayKey;
use crate::habit::record::{Habit, clean_name, new_habit_id};
use crate::habit::sort::Preferences;
use crate::habit::streak;
use tracing::debug;

/// Most recently deleted habit, restorable until `expires_at`
#[derive(Debug, Clone)]
struct PendingUndo {
    habit: Habit,
    index: usize,
    expires_at: i64,
}

/// Result of an undo request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The habit was put back at its original position
    Restored(Habit),
    /// The undo window had already closed
    Expired,
    /// Nothing was deleted since the last undo
    NothingPending,
    /// A habit with the same id exists again (e.g. re-imported)
    Conflict,
}

/// In-memory habit collection
///
/// Habits are kept newest first: creation inserts at the front, import
/// re-sorts by creation time. The vector order is the "created" order the
/// user sees.
#[derive(Debug, Default)]
pub struct HabitData {
    pub(crate) habits: Vec<Habit>,
    pub preferences: Preferences,
    pending_undo: Option<PendingUndo>,
}

impl HabitData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from previously stored habits and preferences
    pub fn from_parts(habits: Vec<Habit>, preferences: Preferences) -> Self {
        Self {
            habits,
            preferences,
            pending_undo: None,
        }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    /// Create a new habit at the front of the collection
    ///
    /// # Returns
    /// The created habit, or `None` if the trimmed name is empty
    pub fn create(&mut self, name: &str, now_millis: i64) -> Option<&Habit> {
        let name = clean_name(name)?;
        self.habits.insert(0, Habit::new(new_habit_id(), name, now_millis));
        self.habits.first()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|h| h.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Check in the habit for `today`
    ///
    /// # Returns
    /// `None` if no habit has this id, otherwise whether it changed
    pub fn check_in(&mut self, id: &str, today: &DayKey) -> Option<bool> {
        let habit = self.find_by_id_mut(id)?;
        Some(streak::check_in(habit, today))
    }

    /// Reset the habit's running streak
    ///
    /// # Returns
    /// `false` if no habit has this id
    pub fn reset(&mut self, id: &str) -> bool {
        match self.find_by_id_mut(id) {
            Some(habit) => {
                streak::reset(habit);
                true
            }
            None => false,
        }
    }

    /// Rename the habit
    ///
    /// # Returns
    /// `None` if no habit has this id, otherwise whether the name changed
    pub fn rename(&mut self, id: &str, name: &str) -> Option<bool> {
        let habit = self.find_by_id_mut(id)?;
        Some(streak::rename(habit, name))
    }

    /// Remove a habit, keeping it restorable for `undo_window_ms`
    ///
    /// A pending undo from an earlier delete is discarded.
    pub fn delete(&mut self, id: &str, now_millis: i64, undo_window_ms: i64) -> Option<Habit> {
        let index = self.habits.iter().position(|h| h.id == id)?;
        let habit = self.habits.remove(index);
        if let Some(previous) = self.pending_undo.take() {
            debug!(id = %previous.habit.id, "pending undo superseded");
        }
        self.pending_undo = Some(PendingUndo {
            habit: habit.clone(),
            index,
            expires_at: now_millis.saturating_add(undo_window_ms),
        });
        Some(habit)
    }

    /// Put the most recently deleted habit back where it was
    ///
    /// The slot is consumed whatever the outcome.
    pub fn undo_delete(&mut self, now_millis: i64) -> UndoOutcome {
        let Some(pending) = self.pending_undo.take() else {
            return UndoOutcome::NothingPending;
        };
        if now_millis > pending.expires_at {
            return UndoOutcome::Expired;
        }
        if self.contains(&pending.habit.id) {
            return UndoOutcome::Conflict;
        }
        let index = pending.index.min(self.habits.len());
        self.habits.insert(index, pending.habit.clone());
        UndoOutcome::Restored(pending.habit)
    }

    /// Replace the whole collection
    pub(crate) fn replace_all(&mut self, habits: Vec<Habit>) {
        self.habits = habits;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: i64 = 5_000;

    fn data_with(names: &[&str]) -> HabitData {
        let mut data = HabitData::new();
        for (i, name) in names.iter().enumerate() {
            data.create(name, i as i64);
        }
        data
    }

    fn names(data: &HabitData) -> Vec<&str> {
        data.habits().iter().map(|h| h.name.as_str()).collect()
    }

    #[test]
    fn test_create_inserts_newest_first() {
        let data = data_with(&["a", "b", "c"]);
        assert_eq!(names(&data), ["c", "b", "a"]);
    }

    #[test]
    fn test_create_ignores_blank_name() {
        let mut data = HabitData::new();
        assert!(data.create("   ", 0).is_none());
        assert!(data.is_empty());
    }

    #[test]
    fn test_create_trims_name() {
        let mut data = HabitData::new();
        let habit = data.create("  Floss ", 0).unwrap();
        assert_eq!(habit.name, "Floss");
    }

    #[test]
    fn test_create_flattens_line_breaks() {
        let mut data = HabitData::new();
        let habit = data.create("Read\nmore", 0).unwrap();
        assert_eq!(habit.name, "Read more");
        assert!(data.create("\r\n", 0).is_none());
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut data = data_with(&["a"]);
        let before = data.habits().to_vec();
        assert_eq!(data.check_in("missing", &DayKey::new("2024-01-01")), None);
        assert!(!data.reset("missing"));
        assert_eq!(data.rename("missing", "x"), None);
        assert!(data.delete("missing", 0, WINDOW).is_none());
        assert_eq!(data.habits(), before.as_slice());
    }

    #[test]
    fn test_delete_then_undo_restores_position() {
        let mut data = data_with(&["a", "b", "c"]);
        let id = data.habits()[1].id.clone();
        let original = data.habits()[1].clone();

        data.delete(&id, 1_000, WINDOW).unwrap();
        assert_eq!(names(&data), ["c", "a"]);

        assert_eq!(
            data.undo_delete(1_000 + WINDOW),
            UndoOutcome::Restored(original.clone())
        );
        assert_eq!(names(&data), ["c", "b", "a"]);
        assert_eq!(data.habits()[1], original);
    }

    #[test]
    fn test_undo_after_window_has_no_effect() {
        let mut data = data_with(&["a", "b"]);
        let id = data.habits()[0].id.clone();
        data.delete(&id, 1_000, WINDOW);

        assert_eq!(data.undo_delete(1_000 + WINDOW + 1), UndoOutcome::Expired);
        assert_eq!(names(&data), ["a"]);
        assert_eq!(data.undo_delete(1_000), UndoOutcome::NothingPending);
    }

    #[test]
    fn test_second_delete_supersedes_pending_undo() {
        let mut data = data_with(&["a", "b", "c"]);
        let first = data.habits()[0].id.clone();
        let second = data.habits()[1].id.clone();
        data.delete(&first, 0, WINDOW);
        data.delete(&second, 10, WINDOW);

        match data.undo_delete(20) {
            UndoOutcome::Restored(habit) => assert_eq!(habit.name, "b"),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(names(&data), ["b", "a"]);
        assert_eq!(data.undo_delete(20), UndoOutcome::NothingPending);
    }

    #[test]
    fn test_undo_conflicts_with_reappeared_id() {
        let mut data = data_with(&["a"]);
        let habit = data.habits()[0].clone();
        data.delete(&habit.id, 0, WINDOW);
        data.replace_all(vec![habit]);
        assert_eq!(data.undo_delete(1), UndoOutcome::Conflict);
        assert_eq!(data.len(), 1);
    }

    #[test]
    fn test_undo_clamps_index_when_collection_shrank() {
        let mut data = data_with(&["a", "b", "c"]);
        let last = data.habits()[2].id.clone();
        let other = data.habits()[0].id.clone();
        data.delete(&last, 0, WINDOW);
        let removed = data.habits.remove(0);
        assert_eq!(removed.id, other);

        assert!(matches!(data.undo_delete(1), UndoOutcome::Restored(_)));
        assert_eq!(names(&data), ["b", "a"]);
    }
}
