use super::{Db, Shared};
use crate::event::Emitter;

use rowboat_core::{
    schema::{ModelDescriptor, Registry},
    Connection, Error, Result,
};

use std::sync::Arc;

/// Assembles a [`Db`]: the connection adapter plus the model registry.
///
/// Model registration happens here, during the startup phase; the registry
/// is read-only once `build()` returns.
#[derive(Default)]
pub struct Builder {
    connection: Option<Arc<dyn Connection>>,
    models: Vec<ModelDescriptor>,
}

impl Builder {
    pub fn connection(mut self, connection: Arc<dyn Connection>) -> Self {
        self.connection = Some(connection);
        self
    }

    pub fn model(mut self, descriptor: ModelDescriptor) -> Self {
        self.models.push(descriptor);
        self
    }

    pub fn build(self) -> Result<Db> {
        let connection = self
            .connection
            .ok_or_else(|| Error::configuration("no connection adapter configured"))?;

        let mut registry = Registry::builder();
        for model in self.models {
            registry = registry.model(model);
        }

        Ok(Db {
            shared: Arc::new(Shared {
                connection,
                registry: registry.build(),
                emitter: Emitter::new(),
            }),
        })
    }
}
