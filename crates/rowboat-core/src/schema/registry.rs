use super::{ModelDescriptor, Relation};
use crate::{Error, Result};

use std::collections::HashMap;
use std::sync::Arc;

/// Model metadata, frozen at startup.
///
/// Built once through [`RegistryBuilder`] during an explicit setup phase
/// and read-only afterwards. Lookups against unregistered names are
/// configuration errors, never silent absences.
#[derive(Debug, Default)]
pub struct Registry {
    models: HashMap<String, Arc<ModelDescriptor>>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn model(&self, name: &str) -> Result<&Arc<ModelDescriptor>> {
        self.models
            .get(name)
            .ok_or_else(|| Error::configuration(format!("unknown model: {name}")))
    }

    pub fn relation(&self, model: &str, name: &str) -> Result<&Relation> {
        self.model(model)?
            .relations
            .get(name)
            .ok_or_else(|| Error::configuration(format!("unknown relation: {model}.{name}")))
    }
}

#[derive(Debug, Default)]
pub struct RegistryBuilder {
    models: HashMap<String, Arc<ModelDescriptor>>,
}

impl RegistryBuilder {
    pub fn model(mut self, descriptor: ModelDescriptor) -> Self {
        self.models
            .insert(descriptor.name.clone(), Arc::new(descriptor));
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            models: self.models,
        }
    }
}
