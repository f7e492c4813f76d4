//! Import merge
//!
//! Incoming habits are matched to the existing collection by id. An
//! incoming record replaces the existing one wholesale; unknown ids are
//! added. The merged collection is then ordered newest first by creation
//! time.

use crate::csv_codec;
use crate::habit::{Habit, HabitData};
use std::cmp::Reverse;
use std::collections::HashMap;
use tracing::info;

/// Result of an import attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Every parsed row was merged
    Imported { count: usize },
    /// No row could be parsed; the collection was left alone
    Failed,
}

/// Merge `incoming` into `existing`, incoming wins on equal ids
///
/// Existing habits keep their relative order ahead of new ids before the
/// final stable sort, so records with equal creation times stay in a
/// predictable order.
pub fn merge(existing: &[Habit], incoming: Vec<Habit>) -> Vec<Habit> {
    let mut merged: Vec<Habit> = existing.to_vec();
    let mut index: HashMap<String, usize> = merged
        .iter()
        .enumerate()
        .map(|(i, h)| (h.id.clone(), i))
        .collect();

    for habit in incoming {
        match index.get(&habit.id) {
            Some(&i) => merged[i] = habit,
            None => {
                index.insert(habit.id.clone(), merged.len());
                merged.push(habit);
            }
        }
    }

    merged.sort_by_key(|h| Reverse(h.created_at_or_zero()));
    merged
}

/// Merge already-parsed habits into the collection
pub fn import_habits(data: &mut HabitData, incoming: Vec<Habit>) -> ImportOutcome {
    if incoming.is_empty() {
        return ImportOutcome::Failed;
    }
    let count = incoming.len();
    let merged = merge(data.habits(), incoming);
    info!(count, total = merged.len(), "imported habits");
    data.replace_all(merged);
    ImportOutcome::Imported { count }
}

/// Parse CSV text and merge the rows into the collection
pub fn import_csv(data: &mut HabitData, text: &str, now_millis: i64) -> ImportOutcome {
    import_habits(data, csv_codec::parse_csv(text, now_millis))
}
