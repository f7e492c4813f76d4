//! Periodic day-rollover check
//!
//! The only change that happens without a tool call: on a fixed interval
//! the shared "today" reference is re-derived from the clock. Habit data is
//! never touched here.

use crate::habit::TodayTracker;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

/// Spawn the rollover loop on the current tokio runtime
///
/// The task runs until aborted.
pub fn spawn_rollover_task(tracker: Arc<TodayTracker>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if tracker.sync() {
                debug!(today = %tracker.today(), "today reference updated");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::ManualClock;
    use chrono::{NaiveDate, TimeDelta};

    #[tokio::test]
    async fn test_rollover_task_picks_up_new_day() {
        let clock = Arc::new(ManualClock::at(
            NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            23,
        ));
        let tracker = Arc::new(TodayTracker::new(clock.clone()));
        let task = spawn_rollover_task(Arc::clone(&tracker), Duration::from_millis(10));

        clock.advance(TimeDelta::hours(2));
        let mut rolled = false;
        for _ in 0..100 {
            if tracker.today().as_str() == "2024-07-01" {
                rolled = true;
                break;
            }
            time::sleep(Duration::from_millis(10)).await;
        }
        task.abort();
        assert!(rolled);
    }
}
