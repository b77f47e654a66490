use rowboat_core::{async_trait, driver::Response, stmt::Row, stmt::Value, Connection, Error, Result};

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One executed statement: the SQL text plus its bound parameters.
#[derive(Debug, Clone)]
pub struct Exec {
    pub sql: String,
    pub params: Vec<Value>,
}

/// In-memory connection adapter for tests.
///
/// Records every statement it is handed and replays queued responses in
/// order; when the queue runs dry it answers with an empty response. A
/// failure can be injected for the next statement.
#[derive(Debug, Default)]
pub struct RecordingConnection {
    log: Arc<Mutex<Vec<Exec>>>,
    responses: Mutex<VecDeque<Response>>,
    fail_with: Mutex<Option<String>>,
}

impl RecordingConnection {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_response(&self, response: Response) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn push_rows(&self, rows: Vec<Row>) {
        self.push_response(Response::from_rows(rows));
    }

    pub fn push_insert_id(&self, id: i64) {
        self.push_response(Response::inserted(id, 1));
    }

    pub fn push_affected(&self, affected: u64) {
        self.push_response(Response::affected(affected));
    }

    /// The next statement fails with a driver error carrying `message`.
    pub fn fail_next(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    pub fn log(&self) -> ExecLog {
        ExecLog {
            ops: self.log.clone(),
        }
    }
}

#[async_trait]
impl Connection for RecordingConnection {
    async fn execute(&self, sql: &str, params: &[Value]) -> Result<Response> {
        self.log.lock().unwrap().push(Exec {
            sql: sql.to_string(),
            params: params.to_vec(),
        });

        if let Some(message) = self.fail_with.lock().unwrap().take() {
            return Err(Error::driver(anyhow::anyhow!("{message}")));
        }

        Ok(self.responses.lock().unwrap().pop_front().unwrap_or_default())
    }
}

/// A wrapper around the statement log with a clean API for assertions.
pub struct ExecLog {
    ops: Arc<Mutex<Vec<Exec>>>,
}

impl ExecLog {
    pub fn len(&self) -> usize {
        self.ops.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.lock().unwrap().is_empty()
    }

    pub fn sql(&self, index: usize) -> String {
        self.ops.lock().unwrap()[index].sql.clone()
    }

    pub fn params(&self, index: usize) -> Vec<Value> {
        self.ops.lock().unwrap()[index].params.clone()
    }

    pub fn all(&self) -> Vec<Exec> {
        self.ops.lock().unwrap().clone()
    }

    pub fn any<F>(&self, predicate: F) -> bool
    where
        F: Fn(&Exec) -> bool,
    {
        self.ops.lock().unwrap().iter().any(|exec| predicate(exec))
    }

    pub fn count_matching<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Exec) -> bool,
    {
        self.ops
            .lock()
            .unwrap()
            .iter()
            .filter(|exec| predicate(exec))
            .count()
    }
}
