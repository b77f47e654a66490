pub mod recording;
pub use recording::{Exec, ExecLog, RecordingConnection};

use rowboat::{Db, ModelDescriptor, ModelEvent, Relation, Row, Value};

use std::sync::{Arc, Mutex};

/// A `Db` over a recording connection with a minimal `User` model,
/// mirroring the `users(id, firstName)` fixture table.
pub fn users_db() -> (Db, Arc<RecordingConnection>) {
    let conn = RecordingConnection::new();

    let db = Db::builder()
        .connection(conn.clone())
        .model(ModelDescriptor::new("User", "users").without_timestamps())
        .build()
        .unwrap();

    (db, conn)
}

/// A `Db` with a small blog schema covering every relation shape:
/// users have many posts, posts belong to a user, and users and roles
/// are linked through the `role_user` pivot table.
pub fn blog_db() -> (Db, Arc<RecordingConnection>) {
    let conn = RecordingConnection::new();

    let db = Db::builder()
        .connection(conn.clone())
        .model(
            ModelDescriptor::new("User", "users")
                .without_timestamps()
                .relation(
                    "posts",
                    Relation::HasMany {
                        related: "Post".to_string(),
                        foreign_key: "userId".to_string(),
                        local_key: "id".to_string(),
                    },
                )
                .relation(
                    "roles",
                    Relation::BelongsToMany {
                        related: "Role".to_string(),
                        pivot: "role_user".to_string(),
                        foreign_pivot_key: "roleId".to_string(),
                        local_pivot_key: "userId".to_string(),
                    },
                ),
        )
        .model(
            ModelDescriptor::new("Post", "posts")
                .without_timestamps()
                .relation(
                    "user",
                    Relation::BelongsTo {
                        related: "User".to_string(),
                        foreign_key: "userId".to_string(),
                        owner_key: "id".to_string(),
                    },
                ),
        )
        .model(ModelDescriptor::new("Role", "roles").without_timestamps())
        .build()
        .unwrap();

    (db, conn)
}

pub fn user_row(id: i64, first_name: &str) -> Row {
    [
        ("id".to_string(), Value::from(id)),
        ("firstName".to_string(), Value::from(first_name)),
    ]
    .into_iter()
    .collect()
}

/// A row shaped like the aggregate count result.
pub fn count_row(total: i64) -> Row {
    [("count".to_string(), Value::from(total))].into_iter().collect()
}

/// Registers a listener for every lifecycle event and returns the sink the
/// fired event names land in, in firing order.
pub fn capture_events(db: &Db) -> Arc<Mutex<Vec<&'static str>>> {
    let events = Arc::new(Mutex::new(Vec::new()));

    for event in [
        ModelEvent::Saving,
        ModelEvent::Creating,
        ModelEvent::Created,
        ModelEvent::Updating,
        ModelEvent::Updated,
        ModelEvent::Saved,
        ModelEvent::Deleting,
        ModelEvent::Deleted,
    ] {
        let sink = events.clone();
        db.on(event, move |_| sink.lock().unwrap().push(event.as_str()));
    }

    events
}
