use pretty_assertions::assert_eq;
use rowboat::Value;
use rowboat_tests::{capture_events, user_row, users_db};

#[tokio::test]
async fn delete_persisted_record_fires_events() {
    let (db, conn) = users_db();
    conn.push_rows(vec![user_row(1, "test1")]);

    let user = db.find_by_id("User", 1).await.unwrap().unwrap();
    let events = capture_events(&db);

    conn.push_affected(1);
    let deleted = user.delete().await.unwrap();

    assert!(deleted);
    assert_eq!(*events.lock().unwrap(), ["model-deleting", "model-deleted"]);

    let log = conn.log();
    assert_eq!(log.sql(1), "DELETE FROM users WHERE id = ?");
    assert_eq!(log.params(1), vec![Value::from(1)]);
}

#[tokio::test]
async fn delete_leaves_exists_set() {
    let (db, conn) = users_db();
    conn.push_rows(vec![user_row(1, "test1")]);

    let user = db.find_by_id("User", 1).await.unwrap().unwrap();
    conn.push_affected(1);
    assert!(user.delete().await.unwrap());

    // Observed behavior: a successful delete does not reset `exists`.
    assert!(user.exists());
}

#[tokio::test]
async fn delete_transient_record_is_a_noop() {
    let (db, conn) = users_db();
    let events = capture_events(&db);

    let user = db.record("User", user_row(1, "test1")).unwrap();
    let deleted = user.delete().await.unwrap();

    assert!(!deleted);
    assert!(events.lock().unwrap().is_empty());
    assert!(conn.log().is_empty());
}
