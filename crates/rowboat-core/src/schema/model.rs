use super::Relation;
use crate::stmt::{Row, Value};

use indexmap::IndexMap;

use std::collections::HashMap;
use std::sync::Arc;

/// A computed accessor: invoked with the raw attribute map when the record
/// is read through the accessor's key, instead of returning the stored
/// value.
pub type Accessor = Arc<dyn Fn(&Row) -> Value + Send + Sync>;

/// Everything the core needs to know about one registered model.
pub struct ModelDescriptor {
    pub name: String,
    pub table: String,
    pub primary_key: String,

    /// Relation accessor name -> descriptor, in declaration order.
    pub relations: IndexMap<String, Relation>,

    /// Computed accessors, consulted before the raw attribute store.
    pub accessors: HashMap<String, Accessor>,

    /// Keys omitted when the record is rendered back into a row.
    pub hidden: Vec<String>,

    /// When set, `save()` stamps the timestamp columns below.
    pub timestamps: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl ModelDescriptor {
    pub fn new(name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            primary_key: "id".to_string(),
            relations: IndexMap::new(),
            accessors: HashMap::new(),
            hidden: Vec::new(),
            timestamps: true,
            created_at: "createdAt".to_string(),
            updated_at: "updatedAt".to_string(),
        }
    }

    pub fn primary_key(mut self, key: impl Into<String>) -> Self {
        self.primary_key = key.into();
        self
    }

    pub fn relation(mut self, name: impl Into<String>, relation: Relation) -> Self {
        self.relations.insert(name.into(), relation);
        self
    }

    pub fn accessor(
        mut self,
        name: impl Into<String>,
        accessor: impl Fn(&Row) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.accessors.insert(name.into(), Arc::new(accessor));
        self
    }

    pub fn hidden(mut self, keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.hidden = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn without_timestamps(mut self) -> Self {
        self.timestamps = false;
        self
    }

    pub fn timestamp_columns(
        mut self,
        created_at: impl Into<String>,
        updated_at: impl Into<String>,
    ) -> Self {
        self.created_at = created_at.into();
        self.updated_at = updated_at.into();
        self
    }
}

impl std::fmt::Debug for ModelDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelDescriptor")
            .field("name", &self.name)
            .field("table", &self.table)
            .field("primary_key", &self.primary_key)
            .field("relations", &self.relations)
            .field("accessors", &self.accessors.keys())
            .field("hidden", &self.hidden)
            .field("timestamps", &self.timestamps)
            .finish()
    }
}
