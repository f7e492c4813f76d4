//! Calendar-day keys and the ambient "today"
//!
//! Day arithmetic works on local dates anchored at noon. The current day is
//! read from a shared tracker refreshed by the rollover check.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;

/// Milliseconds in one calendar day
const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Hour of day used to anchor day keys before subtracting them
const NEUTRAL_HOUR: u32 = 12;

/// Canonical calendar-day key in `YYYY-MM-DD` form
///
/// Keys carry no timezone offset. A key read from storage or an imported
/// CSV row is kept verbatim and only interpreted when arithmetic is needed,
/// so a key that does not name a real date survives a round trip untouched.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(String);

impl DayKey {
    /// Wrap a raw key without validating it
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Build the zero-padded key for a calendar date
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the key as a (year, month, day) triple
    ///
    /// # Returns
    /// `None` when the key is not three dash-separated numbers naming a real date
    pub fn to_date(&self) -> Option<NaiveDate> {
        let mut parts = self.0.trim().split('-');
        let year: i32 = parts.next()?.parse().ok()?;
        let month: u32 = parts.next()?.parse().ok()?;
        let day: u32 = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        NaiveDate::from_ymd_opt(year, month, day)
    }

    fn neutral_instant(&self) -> Option<NaiveDateTime> {
        self.to_date()?.and_hms_opt(NEUTRAL_HOUR, 0, 0)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

/// Signed number of calendar days from `a` to `b`
///
/// Both keys are anchored at noon and the millisecond difference is divided
/// by the length of a day and rounded, so any sub-day drift cannot produce
/// an off-by-one result.
///
/// # Returns
/// `None` if either key does not parse into a calendar date
pub fn days_between(a: &DayKey, b: &DayKey) -> Option<i64> {
    let from = a.neutral_instant()?;
    let to = b.neutral_instant()?;
    let millis = (to - from).num_milliseconds();
    Some((millis as f64 / MILLIS_PER_DAY as f64).round() as i64)
}

/// Source of the current wall-clock time
pub trait Clock: Send + Sync {
    /// Current local date-time, without offset
    fn now(&self) -> NaiveDateTime;

    /// Current time as epoch milliseconds
    fn now_millis(&self) -> i64;

    /// Key of the current local calendar date
    fn today_key(&self) -> DayKey {
        DayKey::from_date(self.now().date())
    }
}

/// Clock backed by the operating system's local time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn now_millis(&self) -> i64 {
        Local::now().timestamp_millis()
    }
}

/// Clock that only moves when told to
///
/// Epoch milliseconds are derived by reading the stored date-time as UTC.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Clock set to the given date at the given hour
    ///
    /// Falls back to midnight if `hour` is out of range.
    pub fn at(date: NaiveDate, hour: u32) -> Self {
        let time = NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default();
        Self::new(date.and_time(time))
    }

    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }

    pub fn advance(&self, delta: TimeDelta) {
        let mut now = self.now.lock().unwrap_or_else(PoisonError::into_inner);
        *now += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn now_millis(&self) -> i64 {
        self.now().and_utc().timestamp_millis()
    }
}

/// Process-wide "today" reference
///
/// Every check-in and view reads the day from here instead of asking the
/// clock, so all decisions between two rollover checks agree on the date.
/// Only [`TodayTracker::sync`] moves it forward.
pub struct TodayTracker {
    clock: Arc<dyn Clock>,
    current: Mutex<DayKey>,
}

impl TodayTracker {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        let current = Mutex::new(clock.today_key());
        Self { clock, current }
    }

    /// The day key all current decisions are made against
    pub fn today(&self) -> DayKey {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Current time in epoch milliseconds from the underlying clock
    pub fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }

    /// Re-derive today's key from the clock
    ///
    /// # Returns
    /// `true` if the calendar day changed since the last sync
    pub fn sync(&self) -> bool {
        let now_key = self.clock.today_key();
        let mut current = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        if *current == now_key {
            return false;
        }
        info!(from = %current, to = %now_key, "calendar day rolled over");
        *current = now_key;
        true
    }
}
