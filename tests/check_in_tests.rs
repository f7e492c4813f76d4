//! Check-in, reset and rename tests
mod common;

use common::{add_habit, get_test_harness};
use habit_mcp::DayKey;

#[tokio::test]
async fn test_streak_over_consecutive_days_and_gap() {
    let h = get_test_harness(2024, 1, 1);
    let id = add_habit(&h.handler, "Read").await;

    h.handler.handle_check_in(id.clone()).await.unwrap();
    h.advance_days(1);
    h.handler.handle_check_in(id.clone()).await.unwrap();
    h.advance_days(2);
    let response = h.handler.handle_check_in(id.clone()).await.unwrap();

    assert!(response.contains("streak 1, best 2"));
    let habits = h.handler.habits();
    assert_eq!(habits[0].last_check, Some(DayKey::new("2024-01-04")));
}

#[tokio::test]
async fn test_second_check_in_same_day_changes_nothing() {
    let h = get_test_harness(2024, 1, 1);
    let id = add_habit(&h.handler, "Read").await;

    h.handler.handle_check_in(id.clone()).await.unwrap();
    let once = h.handler.habits();
    let response = h.handler.handle_check_in(id.clone()).await.unwrap();

    assert!(response.contains("already checked in"));
    assert_eq!(h.handler.habits(), once);
}

#[tokio::test]
async fn test_reset_keeps_best() {
    let h = get_test_harness(2024, 1, 1);
    let id = add_habit(&h.handler, "Read").await;
    for _ in 0..5 {
        h.handler.handle_check_in(id.clone()).await.unwrap();
        h.advance_days(1);
    }

    h.handler.handle_reset_habit(id.clone()).await.unwrap();

    let habit = h.handler.habits().remove(0);
    assert_eq!(habit.streak, 0);
    assert_eq!(habit.best, 5);
    assert!(habit.last_check.is_none());
}

#[tokio::test]
async fn test_rename_keeps_streak() {
    let h = get_test_harness(2024, 1, 1);
    let id = add_habit(&h.handler, "Read").await;
    h.handler.handle_check_in(id.clone()).await.unwrap();

    h.handler
        .handle_rename_habit(id.clone(), "  Read 20 pages ".to_string())
        .await
        .unwrap();

    let habit = h.handler.habits().remove(0);
    assert_eq!(habit.name, "Read 20 pages");
    assert_eq!(habit.streak, 1);
}

#[tokio::test]
async fn test_blank_names_are_ignored() {
    let h = get_test_harness(2024, 1, 1);
    let response = h.handler.handle_add_habit("   ".to_string()).await.unwrap();
    assert!(response.contains("nothing created"));
    assert!(h.handler.habits().is_empty());

    let id = add_habit(&h.handler, "Read").await;
    h.handler
        .handle_rename_habit(id, "".to_string())
        .await
        .unwrap();
    assert_eq!(h.handler.habits()[0].name, "Read");
}

#[tokio::test]
async fn test_unknown_id_is_not_an_error() {
    let h = get_test_harness(2024, 1, 1);
    add_habit(&h.handler, "Read").await;
    let before = h.handler.habits();

    for result in [
        h.handler.handle_check_in("nope".to_string()).await,
        h.handler.handle_reset_habit("nope".to_string()).await,
        h.handler
            .handle_rename_habit("nope".to_string(), "x".to_string())
            .await,
        h.handler.handle_delete_habit("nope".to_string()).await,
    ] {
        assert!(result.unwrap().contains("not found"));
    }
    assert_eq!(h.handler.habits(), before);
}

#[tokio::test]
async fn test_state_survives_restart() {
    let h = get_test_harness(2024, 1, 1);
    let id = add_habit(&h.handler, "Read").await;
    h.handler.handle_check_in(id.clone()).await.unwrap();
    h.handler.handle_set_sort("name".to_string()).await.unwrap();

    let reopened = h.reopen();
    assert_eq!(reopened.habits(), h.handler.habits());
    assert!(
        reopened
            .handle_list_habits(None)
            .await
            .unwrap()
            .contains("Sorted by: name")
    );
}

#[tokio::test]
async fn test_list_shows_summary_and_today_marks() {
    let h = get_test_harness(2024, 1, 1);
    let read = add_habit(&h.handler, "Read").await;
    add_habit(&h.handler, "Walk").await;
    h.handler.handle_check_in(read).await.unwrap();

    let text = h
        .handler
        .handle_list_habits(Some("today".to_string()))
        .await
        .unwrap();
    assert!(text.contains("Today: 2024-01-01"));
    assert!(text.contains("Habits: 2 | Checked today: 1 | Best streak: 1 | Done: 50%"));
    let read_pos = text.find("- [x] Read").unwrap();
    let walk_pos = text.find("- [ ] Walk").unwrap();
    assert!(read_pos < walk_pos);
}

#[tokio::test]
async fn test_invalid_sort_is_an_error() {
    let h = get_test_harness(2024, 1, 1);
    assert!(h.handler.handle_set_sort("oldest".to_string()).await.is_err());
    assert!(
        h.handler
            .handle_list_habits(Some("oldest".to_string()))
            .await
            .is_err()
    );
}
