//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::{NaiveDate, TimeDelta};
use habit_mcp::{HabitConfig, HabitServerHandler, ManualClock, Storage, TodayTracker};
use std::sync::Arc;
use tempfile::NamedTempFile;

/// A handler on temporary file storage with a manually driven clock
pub struct TestHarness {
    pub handler: HabitServerHandler,
    pub clock: Arc<ManualClock>,
    pub file: NamedTempFile,
}

impl TestHarness {
    /// Move the clock forward by `days` and run the rollover check
    pub fn advance_days(&self, days: i64) {
        self.clock.advance(TimeDelta::days(days));
        self.handler.sync_today();
    }

    /// Move the clock forward without running the rollover check
    pub fn advance_millis(&self, millis: i64) {
        self.clock.advance(TimeDelta::milliseconds(millis));
    }

    /// Open a second handler on the same file, as after a restart
    pub fn reopen(&self) -> HabitServerHandler {
        HabitServerHandler::with_parts(
            Storage::file(self.file.path()),
            Arc::new(TodayTracker::new(self.clock.clone())),
            HabitConfig::default(),
        )
        .unwrap()
    }
}

/// Create a test harness whose clock starts at 09:00 on the given date
pub fn get_test_harness(year: i32, month: u32, day: u32) -> TestHarness {
    let file = NamedTempFile::new().unwrap();
    let clock = Arc::new(ManualClock::at(
        NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        9,
    ));
    let handler = HabitServerHandler::with_parts(
        Storage::file(file.path()),
        Arc::new(TodayTracker::new(clock.clone())),
        HabitConfig::default(),
    )
    .unwrap();
    TestHarness {
        handler,
        clock,
        file,
    }
}

/// Extract habit ID from add_habit() response message
/// Response format: "Habit created with ID: <id> (name: ...)"
pub fn extract_id_from_response(response: &str) -> String {
    if let Some(start) = response.find("ID: ") {
        let id_part = &response[start + 4..];
        if let Some(end) = id_part.find(" (") {
            return id_part[..end].trim().to_string();
        }
    }
    response
        .split_whitespace()
        .last()
        .unwrap_or("")
        .trim_end_matches(')')
        .to_string()
}

/// Add a habit and return its ID
pub async fn add_habit(handler: &HabitServerHandler, name: &str) -> String {
    let response = handler.handle_add_habit(name.to_string()).await.unwrap();
    extract_id_from_response(&response)
}
