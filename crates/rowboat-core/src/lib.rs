pub mod attr;
pub use attr::AttributeStore;

pub mod driver;
pub use driver::Connection;

mod error;
pub use error::Error;

pub mod schema;
pub use schema::{ModelDescriptor, Registry, Relation};

pub mod stmt;

/// A Result type alias that uses rowboat's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
