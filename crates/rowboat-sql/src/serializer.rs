#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod expr;
mod statement;

use statement::{Delete, Insert, Select, Update};

use rowboat_core::stmt::{Query, Row};

/// Serialize accumulated clause state to a SQL string.
///
/// Stateless: one routine per statement kind. Every literal value is pushed
/// through the [`Params`] sink and rendered as a `?` placeholder; values are
/// never interpolated into the SQL text.
#[derive(Debug, Default)]
pub struct Serializer;

struct Formatter<'a, T> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store bound parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn new() -> Self {
        Self
    }

    pub fn serialize_select(&self, query: &Query, params: &mut impl Params) -> String {
        self.render(
            Select {
                query,
                count: false,
            },
            params,
        )
    }

    /// Aggregate form: substitutes `COUNT(*)` for the column list while
    /// keeping FROM/JOIN/WHERE (and grouping) unchanged. Orders, limit and
    /// offset do not apply to the aggregate.
    pub fn serialize_count(&self, query: &Query, params: &mut impl Params) -> String {
        self.render(Select { query, count: true }, params)
    }

    /// One statement with one or many value tuples. All rows share the
    /// first row's column set.
    pub fn serialize_insert(&self, table: &str, rows: &[Row], params: &mut impl Params) -> String {
        self.render(Insert { table, rows }, params)
    }

    pub fn serialize_update(
        &self,
        query: &Query,
        assignments: &Row,
        params: &mut impl Params,
    ) -> String {
        self.render(Update { query, assignments }, params)
    }

    pub fn serialize_delete(&self, query: &Query, params: &mut impl Params) -> String {
        self.render(Delete { query }, params)
    }

    fn render(&self, fragment: impl ToSql, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            params,
        };

        fragment.to_sql(&mut fmt);
        ret
    }
}
