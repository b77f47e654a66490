pub mod db;
pub use db::Db;

pub mod event;
pub use event::{Emitter, ModelEvent};

mod page;
pub use page::Page;

mod query;
pub use query::QueryBuilder;

mod record;
pub use record::Record;

mod relation;

pub use rowboat_core::{
    driver::Response,
    schema::{ModelDescriptor, Registry, Relation},
    stmt::{self, Direction, JoinKind, Operator, Row, Value},
    Connection, Error, Result,
};
