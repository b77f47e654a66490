use super::{Join, OrderBy, Where};

/// Accumulated clause state for one query.
///
/// The query builder mutates this; the serializer reads it. Wheres, joins,
/// and orders render in insertion order.
#[derive(Debug, Default, Clone)]
pub struct Query {
    /// Model name this query is bound to, if any. Bound queries map result
    /// rows into records; unbound queries yield raw rows.
    pub model: Option<String>,

    pub distinct: bool,

    /// When set, the query fetches at most one row and the result is
    /// trimmed to the first item.
    pub is_first: bool,

    pub selects: Vec<String>,
    pub raw_selects: Vec<String>,

    /// The base table. All other tables are appended via joins.
    pub from: String,

    pub joins: Vec<Join>,
    pub wheres: Vec<Where>,
    pub groups: Vec<String>,
    pub havings: Vec<Where>,
    pub orders: Vec<OrderBy>,

    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }
}
