//! Delete and undo tests
mod common;

use common::{add_habit, get_test_harness};

#[tokio::test]
async fn test_undo_within_window_restores_position() {
    let h = get_test_harness(2024, 1, 1);
    add_habit(&h.handler, "a").await;
    let b = add_habit(&h.handler, "b").await;
    add_habit(&h.handler, "c").await;
    let before = h.handler.habits();

    h.handler.handle_delete_habit(b).await.unwrap();
    assert_eq!(h.handler.habits().len(), 2);

    h.advance_millis(4_000);
    let response = h.handler.handle_undo_delete().await.unwrap();
    assert_eq!(response, "Restored 'b'");
    assert_eq!(h.handler.habits(), before);
    // Restoration is persisted
    assert_eq!(h.reopen().habits(), before);
}

#[tokio::test]
async fn test_undo_after_window_does_nothing() {
    let h = get_test_harness(2024, 1, 1);
    let a = add_habit(&h.handler, "a").await;

    h.handler.handle_delete_habit(a).await.unwrap();
    h.advance_millis(5_001);
    let response = h.handler.handle_undo_delete().await.unwrap();

    assert!(response.contains("expired"));
    assert!(h.handler.habits().is_empty());
    assert!(h.reopen().habits().is_empty());
}

#[tokio::test]
async fn test_second_delete_finalizes_the_first() {
    let h = get_test_harness(2024, 1, 1);
    let a = add_habit(&h.handler, "a").await;
    let b = add_habit(&h.handler, "b").await;

    h.handler.handle_delete_habit(a).await.unwrap();
    h.handler.handle_delete_habit(b).await.unwrap();

    assert_eq!(h.handler.handle_undo_delete().await.unwrap(), "Restored 'b'");
    assert_eq!(h.handler.handle_undo_delete().await.unwrap(), "Nothing to undo");
    let names: Vec<String> = h.handler.habits().into_iter().map(|x| x.name).collect();
    assert_eq!(names, ["b"]);
}
