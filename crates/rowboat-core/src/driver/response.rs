use crate::stmt::Row;

/// Result of executing one statement through a [`Connection`].
///
/// [`Connection`]: super::Connection
#[derive(Debug, Default, Clone)]
pub struct Response {
    /// Rows produced by a select. Empty for writes.
    pub rows: Vec<Row>,

    /// Identifier generated by an insert, when the adapter produced one.
    pub insert_id: Option<i64>,

    /// Rows affected by a write.
    pub affected: u64,
}

impl Response {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn inserted(insert_id: i64, affected: u64) -> Self {
        Self {
            insert_id: Some(insert_id),
            affected,
            rows: Vec::new(),
        }
    }

    pub fn affected(affected: u64) -> Self {
        Self {
            affected,
            ..Self::default()
        }
    }
}
