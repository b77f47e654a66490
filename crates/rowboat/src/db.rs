mod builder;
pub use builder::Builder;

use crate::{
    event::{Emitter, ModelEvent},
    query::QueryBuilder,
    record::Record,
};

use rowboat_core::{
    driver::Response,
    schema::Registry,
    stmt::{Operator, Row, Value},
    Connection, Result,
};

use std::sync::Arc;

/// Shared state between all `Db` clones.
pub(crate) struct Shared {
    pub(crate) connection: Arc<dyn Connection>,
    pub(crate) registry: Registry,
    pub(crate) emitter: Emitter,
}

/// Handle to the connection adapter, the model registry, and the event
/// emitter. Cheap to clone; every builder and record carries one.
#[derive(Clone)]
pub struct Db {
    pub(crate) shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Unbound query over a raw table; results come back as raw rows.
    pub fn query(&self, table: &str) -> QueryBuilder {
        QueryBuilder::new(self.clone()).from(table)
    }

    /// Query bound to a registered model; result rows come back as records.
    pub fn model(&self, name: &str) -> Result<QueryBuilder> {
        QueryBuilder::new(self.clone()).set_model(name)
    }

    /// A new transient record for a registered model.
    pub fn record(&self, model: &str, attributes: Row) -> Result<Record> {
        let descriptor = self.shared.registry.model(model)?.clone();
        Ok(Record::new(self.clone(), descriptor, attributes, false))
    }

    /// Fetch one record by primary key. Absence is not an error.
    pub async fn find_by_id(&self, model: &str, id: impl Into<Value>) -> Result<Option<Record>> {
        let primary_key = self.shared.registry.model(model)?.primary_key.clone();
        self.model(model)?
            .set_is_first(true)
            .where_(primary_key, Operator::Eq, id)
            .first()
            .await
    }

    /// Multi-row insert for a registered model; returns the affected count.
    pub async fn save_many(&self, model: &str, rows: Vec<Row>) -> Result<u64> {
        self.model(model)?.insert_many(rows).await
    }

    /// Register a listener for a lifecycle event.
    pub fn on(&self, event: ModelEvent, listener: impl Fn(&Record) + Send + Sync + 'static) {
        self.shared.emitter.on(event, listener);
    }

    pub fn registry(&self) -> &Registry {
        &self.shared.registry
    }

    pub(crate) async fn execute(&self, sql: &str, params: &[Value]) -> Result<Response> {
        tracing::debug!(sql, params = params.len(), "executing statement");
        self.shared.connection.execute(sql, params).await
    }

    pub(crate) fn fire(&self, event: ModelEvent, record: &Record) {
        self.shared.emitter.fire(event, record);
    }

    /// Timestamp value applied to `createdAt`/`updatedAt` columns.
    pub(crate) fn now(&self) -> Value {
        Value::from(chrono::Utc::now().to_rfc3339())
    }
}
