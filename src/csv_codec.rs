//! CSV backup format
//!
//! One habit per row under a fixed header:
//!
//! ```text
//! id,name,streak,best,lastCheck,createdAt
//! 5f0c...,"Say ""hi""",3,7,2024-01-10,1704844800000
//! ```
//!
//! The name is always quoted with embedded quotes doubled; every other
//! field is bare. Parsing accepts exactly this shape and skips any row
//! that does not match instead of failing the whole file.

use crate::habit::{DayKey, Habit, clean_name, new_habit_id};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Column names, in order
pub const HEADER: [&str; 6] = ["id", "name", "streak", "best", "lastCheck", "createdAt"];

/// Everything after the id: quoted name then four bare fields
static ROW_REST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^"((?:[^"]|"")*)",([^,]*),([^,]*),([^,]*),([^,]*)$"#)
        .expect("row pattern is valid")
});

/// Name of the backup file written on `today`
pub fn export_filename(today: &DayKey) -> String {
    format!("habits-backup-{}.csv", today)
}

/// Serialize habits to CSV text, header first, rows joined by `\n`
pub fn to_csv(habits: &[Habit]) -> String {
    let mut lines = Vec::with_capacity(habits.len() + 1);
    lines.push(HEADER.join(","));
    for habit in habits {
        lines.push(format_row(habit));
    }
    lines.join("\n")
}

fn format_row(habit: &Habit) -> String {
    // A line break inside the quoted name would split the row on import
    let name = clean_name(&habit.name).unwrap_or_default();
    format!(
        "{},\"{}\",{},{},{},{}",
        habit.id,
        name.replace('"', "\"\""),
        habit.streak,
        habit.best,
        habit.last_check.as_ref().map(DayKey::as_str).unwrap_or(""),
        habit
            .created_at
            .map(|t| t.to_string())
            .unwrap_or_default()
    )
}

/// Parse CSV text produced by [`to_csv`]
///
/// The first line is treated as the header and ignored. Rows that do not
/// match the expected shape are skipped.
///
/// # Arguments
/// * `text` - CSV text
/// * `now_millis` - Creation time assigned to rows without a usable `createdAt`
///
/// # Returns
/// The parsed habits; empty when there was nothing usable
pub fn parse_csv(text: &str, now_millis: i64) -> Vec<Habit> {
    let lines: Vec<&str> = text.trim().lines().collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    let mut out = Vec::new();
    for (number, line) in lines.iter().enumerate().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_row(line, now_millis) {
            Some(habit) => out.push(habit),
            None => debug!(line = number + 1, "skipping unrecognized CSV row"),
        }
    }
    out
}

fn parse_row(line: &str, now_millis: i64) -> Option<Habit> {
    let (id, rest) = line.split_once(',')?;
    let caps = ROW_REST.captures(rest)?;

    let name = caps[1].replace("\"\"", "\"");
    if name.trim().is_empty() {
        return None;
    }

    let last_check = caps[4].trim();
    let mut habit = Habit {
        id: if id.is_empty() {
            new_habit_id()
        } else {
            id.to_string()
        },
        name,
        streak: parse_count(&caps[2]),
        best: parse_count(&caps[3]),
        last_check: (!last_check.is_empty()).then(|| DayKey::new(last_check)),
        created_at: Some(parse_timestamp(&caps[5]).unwrap_or(now_millis)),
    };
    habit.normalize();
    Some(habit)
}

/// Non-negative whole count; anything unusable reads as 0
fn parse_count(field: &str) -> u32 {
    match field.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => n.trunc().min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

fn parse_timestamp(field: &str) -> Option<i64> {
    let field = field.trim();
    if let Ok(t) = field.parse::<i64>() {
        return Some(t);
    }
    field
        .parse::<f64>()
        .ok()
        .filter(|t| t.is_finite())
        .map(|t| t.trunc() as i64)
}
