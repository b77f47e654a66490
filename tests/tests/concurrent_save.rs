use std::sync::Arc;

use rowboat_tests::{user_row, users_db};

#[tokio::test]
async fn concurrent_saves_insert_exactly_once() {
    let (db, conn) = users_db();
    conn.push_insert_id(1);

    let user = Arc::new(db.record("User", user_row(1, "test1")).unwrap());

    let a = {
        let user = user.clone();
        tokio::spawn(async move { user.save().await })
    };
    let b = {
        let user = user.clone();
        tokio::spawn(async move { user.save().await })
    };

    let a = a.await.unwrap().unwrap();
    let b = b.await.unwrap().unwrap();

    // One task performs the insert, the other observes a clean record.
    assert!(a ^ b);
    assert!(user.exists());
    assert_eq!(
        conn.log()
            .count_matching(|exec| exec.sql.starts_with("INSERT")),
        1
    );
}
