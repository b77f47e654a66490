use std::sync::Arc;

use pretty_assertions::assert_eq;
use rowboat::{Db, ModelDescriptor, Row, Value};
use rowboat_tests::{user_row, users_db, RecordingConnection};

/// A `User` model with the full descriptor surface switched on: hidden
/// keys, a computed accessor, and managed timestamps.
fn surface_db() -> (Db, Arc<RecordingConnection>) {
    let conn = RecordingConnection::new();

    let db = Db::builder()
        .connection(conn.clone())
        .model(
            ModelDescriptor::new("User", "users")
                .hidden(["password"])
                .accessor("displayName", |row: &Row| match row.get("firstName") {
                    Some(Value::String(name)) => Value::from(name.to_uppercase()),
                    _ => Value::Null,
                }),
        )
        .build()
        .unwrap();

    (db, conn)
}

#[test]
fn hidden_keys_are_omitted_from_to_row() {
    let (db, _conn) = surface_db();

    let user = db.record("User", user_row(1, "test1")).unwrap();
    user.set("password", "secret");

    let row = user.to_row();
    assert!(!row.contains_key("password"));
    assert_eq!(row.get("firstName"), Some(&Value::from("test1")));

    // The value is still stored, just not rendered.
    assert_eq!(user.get("password"), Value::from("secret"));
}

#[test]
fn computed_accessor_shadows_the_stored_value() {
    let (db, _conn) = surface_db();

    let user = db.record("User", user_row(1, "test1")).unwrap();
    user.set("displayName", "stored");

    assert_eq!(user.get("displayName"), Value::from("TEST1"));
    assert_eq!(user.get_raw("displayName"), Value::from("stored"));
}

#[test]
fn equals_compares_model_and_primary_key() {
    let (users, _) = users_db();
    let (surface, _) = surface_db();

    let a = users.record("User", user_row(1, "test1")).unwrap();
    let b = users.record("User", user_row(1, "other")).unwrap();
    let c = users.record("User", user_row(2, "test1")).unwrap();
    let d = surface.record("User", user_row(1, "test1")).unwrap();

    assert!(a.equals(&b));
    assert!(!a.equals(&c));
    // Same key, same model name, different `Db` still counts as equal.
    assert!(a.equals(&d));
}

#[tokio::test]
async fn insert_stamps_both_timestamp_columns() {
    let (db, conn) = surface_db();
    conn.push_insert_id(1);

    let user = db.record("User", user_row(1, "test1")).unwrap();
    assert!(user.save().await.unwrap());

    let log = conn.log();
    assert_eq!(
        log.sql(0),
        "INSERT INTO users (id, firstName, createdAt, updatedAt) VALUES (?, ?, ?, ?)"
    );

    let params = log.params(0);
    assert!(matches!(&params[2], Value::String(_)));
    assert_eq!(params[2], params[3]);
    assert_eq!(user.get("createdAt"), params[2]);
}

#[tokio::test]
async fn update_stamps_only_updated_at() {
    let (db, conn) = surface_db();
    conn.push_rows(vec![user_row(1, "test1")]);

    let user = db.find_by_id("User", 1).await.unwrap().unwrap();
    user.set("firstName", "test2");

    conn.push_affected(1);
    assert!(user.save().await.unwrap());

    let log = conn.log();
    assert_eq!(
        log.sql(1),
        "UPDATE users SET id = ?, firstName = ?, updatedAt = ? WHERE id = ?"
    );
    assert!(matches!(&log.params(1)[2], Value::String(_)));
    assert_eq!(user.get("createdAt"), Value::Null);
}
