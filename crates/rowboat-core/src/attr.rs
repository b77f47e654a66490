use crate::stmt::{Row, Value};

/// Field values for one record, plus the list of keys changed since the
/// last successful persist.
///
/// Dirty tracking is one-directional: re-setting a field back to its
/// original value does not remove it from the dirty list. Filling from a
/// freshly loaded row marks every field dirty, so a rehydrated record is
/// fully dirty immediately after load. Both behaviors are load-bearing and
/// covered by tests; do not "fix" them here.
#[derive(Debug, Default, Clone)]
pub struct AttributeStore {
    attributes: Row,
    dirty: Vec<String>,
}

impl AttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the stored value. The key joins the dirty list iff the
    /// stored value differs and the key is not already dirty.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();

        if self.attributes.get(&key) != Some(&value) && !self.dirty.iter().any(|k| *k == key) {
            self.dirty.push(key.clone());
        }

        self.attributes.insert(key, value);
    }

    /// Applies [`set`](Self::set) for every entry.
    pub fn fill(&mut self, attributes: Row) {
        for (key, value) in attributes {
            self.set(key, value);
        }
    }

    /// The raw stored value. Computed accessors are dispatched a level up,
    /// by the record that owns this store.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn attributes(&self) -> &Row {
        &self.attributes
    }

    /// Only the dirty keys and their current values, in dirty order.
    pub fn dirty(&self) -> Row {
        self.dirty
            .iter()
            .map(|key| {
                let value = self.attributes.get(key).cloned().unwrap_or(Value::Null);
                (key.clone(), value)
            })
            .collect()
    }

    pub fn dirty_keys(&self) -> &[String] {
        &self.dirty
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Called only after a successful persist.
    pub fn clear_dirty(&mut self) {
        self.dirty.clear();
    }
}
