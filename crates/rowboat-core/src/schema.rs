mod model;
pub use model::{Accessor, ModelDescriptor};

mod registry;
pub use registry::{Registry, RegistryBuilder};

mod relation;
pub use relation::Relation;
