use crate::{db::Db, event::ModelEvent, query::QueryBuilder};

use rowboat_core::{
    schema::ModelDescriptor,
    stmt::{Operator, Row, Value},
    AttributeStore, Result,
};

use std::sync::{Arc, Mutex};

struct State {
    store: AttributeStore,
    exists: bool,
}

/// One in-memory object representing a single row, holding both the data
/// and the operations to persist itself.
///
/// Lifecycle: created transient (`exists = false`) from caller-supplied
/// fields, or persisted (`exists = true`) when mapped from a query row.
/// `exists` flips false to true on a successful insert and never flips
/// back: a successful `delete()` intentionally leaves it set.
pub struct Record {
    db: Db,
    model: Arc<ModelDescriptor>,

    /// Attribute + lifecycle state. Never held across an `.await`.
    state: Mutex<State>,

    /// Serializes the save/delete critical sections, so two concurrent
    /// `save()` calls on one shared record cannot both insert.
    persist: tokio::sync::Mutex<()>,
}

impl Record {
    pub(crate) fn new(db: Db, model: Arc<ModelDescriptor>, attributes: Row, exists: bool) -> Self {
        let mut store = AttributeStore::new();
        // Fills through the dirty-tracking path even on load, so a freshly
        // rehydrated record is fully dirty.
        store.fill(attributes);

        Self {
            db,
            model,
            state: Mutex::new(State { store, exists }),
            persist: tokio::sync::Mutex::new(()),
        }
    }

    pub(crate) fn db(&self) -> &Db {
        &self.db
    }

    pub fn model_name(&self) -> &str {
        &self.model.name
    }

    pub fn table(&self) -> &str {
        &self.model.table
    }

    pub fn primary_key(&self) -> &str {
        &self.model.primary_key
    }

    pub fn exists(&self) -> bool {
        self.state.lock().unwrap().exists
    }

    /// Read one attribute. A computed accessor registered under `key`
    /// takes precedence over the raw store and receives the raw attribute
    /// map.
    pub fn get(&self, key: &str) -> Value {
        let state = self.state.lock().unwrap();

        if let Some(accessor) = self.model.accessors.get(key) {
            return accessor(state.store.attributes());
        }

        state.store.get(key).cloned().unwrap_or(Value::Null)
    }

    /// Read the raw stored value, bypassing computed accessors.
    pub fn get_raw(&self, key: &str) -> Value {
        self.state
            .lock()
            .unwrap()
            .store
            .get(key)
            .cloned()
            .unwrap_or(Value::Null)
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.state.lock().unwrap().store.set(key, value);
    }

    pub fn fill(&self, attributes: Row) {
        self.state.lock().unwrap().store.fill(attributes);
    }

    pub fn is_dirty(&self) -> bool {
        self.state.lock().unwrap().store.is_dirty()
    }

    /// Only the dirty keys and their current values.
    pub fn dirty(&self) -> Row {
        self.state.lock().unwrap().store.dirty()
    }

    /// The attributes as a row, minus the model's hidden keys.
    pub fn to_row(&self) -> Row {
        let state = self.state.lock().unwrap();
        state
            .store
            .attributes()
            .iter()
            .filter(|(key, _)| !self.model.hidden.iter().any(|hidden| hidden == *key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Same model and equal primary-key values.
    pub fn equals(&self, other: &Record) -> bool {
        self.model.name == other.model.name
            && self.get_raw(self.primary_key()) == other.get_raw(other.primary_key())
    }

    fn query(&self) -> Result<QueryBuilder> {
        self.db.model(&self.model.name)
    }

    fn fire(&self, event: ModelEvent) {
        self.db.fire(event, self);
    }

    /// Persist this record.
    ///
    /// Fires `saving` first, always. A dirty persisted record updates its
    /// dirty fields scoped by primary key (`updating`/`updated` around the
    /// statement); a dirty transient record inserts all attributes and
    /// takes over the generated identifier (`creating`/`created`). A clean
    /// record performs no statement and returns `Ok(false)`. Any
    /// successful persist clears the dirty set and fires `saved`.
    pub async fn save(&self) -> Result<bool> {
        let _guard = self.persist.lock().await;

        self.fire(ModelEvent::Saving);

        let (exists, dirty) = {
            let state = self.state.lock().unwrap();
            (state.exists, state.store.is_dirty())
        };

        let success = if exists && dirty {
            self.perform_update().await?
        } else if dirty {
            self.perform_insert().await?
        } else {
            false
        };

        if success {
            self.state.lock().unwrap().store.clear_dirty();
            self.fire(ModelEvent::Saved);
        }

        Ok(success)
    }

    async fn perform_update(&self) -> Result<bool> {
        self.fire(ModelEvent::Updating);

        if self.model.timestamps {
            self.set(self.model.updated_at.clone(), self.db.now());
        }

        let assignments = self.dirty();
        let id = self.get_raw(self.primary_key());

        self.query()?
            .where_(self.model.primary_key.clone(), Operator::Eq, id)
            .update(assignments)
            .await?;

        self.fire(ModelEvent::Updated);
        Ok(true)
    }

    async fn perform_insert(&self) -> Result<bool> {
        self.fire(ModelEvent::Creating);

        if self.model.timestamps {
            let now = self.db.now();
            self.set(self.model.created_at.clone(), now.clone());
            self.set(self.model.updated_at.clone(), now);
        }

        let attributes = self.state.lock().unwrap().store.attributes().clone();
        let insert_id = self.query()?.insert(attributes).await?;

        {
            let mut state = self.state.lock().unwrap();

            // MySQL-style adapters report 0 when no key was generated.
            if let Some(id) = insert_id.filter(|id| *id > 0) {
                state.store.set(self.model.primary_key.clone(), id);
            }

            state.exists = true;
        }

        self.fire(ModelEvent::Created);
        Ok(true)
    }

    /// Delete the persisted row behind this record.
    ///
    /// Transient records return `Ok(false)` with no side effects. `exists`
    /// is not reset after a successful delete.
    pub async fn delete(&self) -> Result<bool> {
        let _guard = self.persist.lock().await;

        if !self.exists() {
            return Ok(false);
        }

        self.fire(ModelEvent::Deleting);

        let id = self.get_raw(self.primary_key());
        self.query()?
            .where_(self.model.primary_key.clone(), Operator::Eq, id)
            .delete()
            .await?;

        self.fire(ModelEvent::Deleted);
        Ok(true)
    }
}

impl std::fmt::Debug for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock().unwrap();
        f.debug_struct("Record")
            .field("model", &self.model.name)
            .field("exists", &state.exists)
            .field("attributes", state.store.attributes())
            .field("dirty", &state.store.dirty_keys())
            .finish()
    }
}
