use crate::{db::Db, page::Page, record::Record};

use rowboat_core::{
    stmt::{Connective, Direction, Join, JoinKind, Operator, OrderBy, Query, Row, Value, Where},
    Error, Result,
};
use rowboat_sql::Serializer;

/// Fluent accumulator of clause state.
///
/// Every clause method consumes and returns the builder; terminal
/// operations compile the state and execute it through the connection
/// adapter. One builder per logical query — builders are not meant for
/// concurrent mutation.
#[derive(Clone)]
pub struct QueryBuilder {
    db: Db,
    state: Query,
}

impl std::fmt::Debug for QueryBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryBuilder")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl QueryBuilder {
    pub(crate) fn new(db: Db) -> Self {
        Self {
            db,
            state: Query::new(),
        }
    }

    /// Replaces the select column list.
    pub fn select(mut self, columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.state.selects = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a raw select expression, rendered verbatim.
    pub fn select_raw(mut self, expr: impl Into<String>) -> Self {
        self.state.raw_selects.push(expr.into());
        self
    }

    pub fn distinct(mut self) -> Self {
        self.state.distinct = true;
        self
    }

    /// Sets the base table. Defaults the select list to `table.*` when
    /// nothing has been selected yet.
    pub fn from(mut self, table: impl Into<String>) -> Self {
        let table = table.into();

        if self.state.selects.is_empty() {
            self.state.selects.push(format!("{table}.*"));
        }

        self.state.from = table;
        self
    }

    /// Binds the query to a registered model and sources it from the
    /// model's table.
    pub fn set_model(mut self, name: &str) -> Result<Self> {
        let table = self.db.shared.registry.model(name)?.table.clone();
        self.state.model = Some(name.to_string());
        Ok(self.from(table))
    }

    pub fn join(
        self,
        table: impl Into<String>,
        local_key: impl Into<String>,
        op: Operator,
        foreign_key: impl Into<String>,
    ) -> Self {
        self.push_join(table, local_key, op, foreign_key, JoinKind::Inner)
    }

    pub fn left_join(
        self,
        table: impl Into<String>,
        local_key: impl Into<String>,
        op: Operator,
        foreign_key: impl Into<String>,
    ) -> Self {
        self.push_join(table, local_key, op, foreign_key, JoinKind::Left)
    }

    pub fn right_join(
        self,
        table: impl Into<String>,
        local_key: impl Into<String>,
        op: Operator,
        foreign_key: impl Into<String>,
    ) -> Self {
        self.push_join(table, local_key, op, foreign_key, JoinKind::Right)
    }

    fn push_join(
        mut self,
        table: impl Into<String>,
        local_key: impl Into<String>,
        op: Operator,
        foreign_key: impl Into<String>,
        kind: JoinKind,
    ) -> Self {
        self.state
            .joins
            .push(Join::new(table, local_key, op, foreign_key, kind));
        self
    }

    pub fn where_(
        mut self,
        column: impl Into<String>,
        op: Operator,
        value: impl Into<Value>,
    ) -> Self {
        self.state
            .wheres
            .push(Where::new(column, op, value, Connective::And));
        self
    }

    pub fn or_where(
        mut self,
        column: impl Into<String>,
        op: Operator,
        value: impl Into<Value>,
    ) -> Self {
        self.state
            .wheres
            .push(Where::new(column, op, value, Connective::Or));
        self
    }

    /// `IN` clause over a non-empty value list. An empty list would
    /// compile to `IN ()`, which no adapter accepts, so it is rejected
    /// before any SQL exists.
    pub fn where_in(
        mut self,
        column: impl Into<String>,
        values: impl IntoIterator<Item = impl Into<Value>>,
    ) -> Result<Self> {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(Error::validation("where_in requires at least one value"));
        }

        self.state.wheres.push(Where::new(
            column,
            Operator::In,
            Value::List(values),
            Connective::And,
        ));
        Ok(self)
    }

    /// Replaces the group list.
    pub fn group_by(mut self, groups: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.state.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    pub fn having(
        mut self,
        column: impl Into<String>,
        op: Operator,
        value: impl Into<Value>,
    ) -> Self {
        self.state
            .havings
            .push(Where::new(column, op, value, Connective::And));
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, direction: Direction) -> Self {
        self.state.orders.push(OrderBy::new(column, direction));
        self
    }

    pub fn limit(mut self, limit: i64) -> Result<Self> {
        if limit < 0 {
            return Err(Error::validation(format!(
                "limit must be non-negative: {limit}"
            )));
        }

        self.state.limit = Some(limit as u64);
        Ok(self)
    }

    pub fn offset(mut self, offset: i64) -> Result<Self> {
        if offset < 0 {
            return Err(Error::validation(format!(
                "offset must be non-negative: {offset}"
            )));
        }

        self.state.offset = Some(offset as u64);
        Ok(self)
    }

    /// When set, the query never fetches more than one row and the result
    /// is trimmed to the first item.
    pub fn set_is_first(mut self, is_first: bool) -> Self {
        self.state.is_first = is_first;

        if is_first {
            self.state.limit = Some(1);
        }

        self
    }

    /// Compile the select without executing it.
    pub fn to_sql(&self) -> (String, Vec<Value>) {
        let mut params = Vec::new();
        let sql = Serializer::new().serialize_select(&self.state, &mut params);
        (sql, params)
    }

    /// Execute and return raw rows, regardless of model binding.
    pub async fn rows(self) -> Result<Vec<Row>> {
        let (sql, params) = self.to_sql();
        let mut rows = self.db.execute(&sql, &params).await?.rows;

        if self.state.is_first {
            rows.truncate(1);
        }

        Ok(rows)
    }

    /// Execute and map each row into a record with `exists = true`.
    /// Requires a model binding.
    pub async fn get(self) -> Result<Vec<Record>> {
        let model = self.state.model.as_deref().ok_or_else(|| {
            Error::configuration("query is not bound to a model; use `rows()` for raw results")
        })?;
        let descriptor = self.db.shared.registry.model(model)?.clone();

        let (sql, params) = self.to_sql();
        let mut rows = self.db.execute(&sql, &params).await?.rows;

        if self.state.is_first {
            rows.truncate(1);
        }

        Ok(rows
            .into_iter()
            .map(|row| Record::new(self.db.clone(), descriptor.clone(), row, true))
            .collect())
    }

    pub async fn first(self) -> Result<Option<Record>> {
        let mut records = self.set_is_first(true).get().await?;
        Ok(records.pop())
    }

    /// Aggregate count over the same from/join/where state. The configured
    /// select list does not affect the total.
    pub async fn count(self) -> Result<u64> {
        let mut params = Vec::new();
        let sql = Serializer::new().serialize_count(&self.state, &mut params);
        let response = self.db.execute(&sql, &params).await?;

        let count = response
            .rows
            .first()
            .and_then(|row| row.get("count"))
            .and_then(Value::as_i64)
            .unwrap_or(0);

        Ok(count.max(0) as u64)
    }

    /// Single-row insert; returns the generated identifier when the
    /// adapter produced one.
    pub async fn insert(self, attributes: Row) -> Result<Option<i64>> {
        if attributes.is_empty() {
            return Err(Error::validation("insert requires at least one attribute"));
        }

        let mut params = Vec::new();
        let sql = Serializer::new().serialize_insert(
            &self.state.from,
            std::slice::from_ref(&attributes),
            &mut params,
        );

        let response = self.db.execute(&sql, &params).await?;
        Ok(response.insert_id)
    }

    /// Multi-row insert. All rows share the first row's column set.
    pub async fn insert_many(self, rows: Vec<Row>) -> Result<u64> {
        if rows.is_empty() {
            return Err(Error::validation("insert_many requires at least one row"));
        }

        let mut params = Vec::new();
        let sql = Serializer::new().serialize_insert(&self.state.from, &rows, &mut params);

        let response = self.db.execute(&sql, &params).await?;
        Ok(response.affected)
    }

    /// Update exactly the passed fields, scoped by the accumulated wheres.
    pub async fn update(self, assignments: Row) -> Result<u64> {
        if assignments.is_empty() {
            return Err(Error::validation("update requires at least one assignment"));
        }

        let mut params = Vec::new();
        let sql = Serializer::new().serialize_update(&self.state, &assignments, &mut params);

        let response = self.db.execute(&sql, &params).await?;
        Ok(response.affected)
    }

    /// Delete scoped by the accumulated wheres.
    pub async fn delete(self) -> Result<u64> {
        let mut params = Vec::new();
        let sql = Serializer::new().serialize_delete(&self.state, &mut params);

        let response = self.db.execute(&sql, &params).await?;
        Ok(response.affected)
    }

    /// [`delete`](Self::delete) with equality conditions appended from
    /// `attributes`.
    pub async fn delete_matching(mut self, attributes: Row) -> Result<u64> {
        for (column, value) in attributes {
            self = self.where_(column, Operator::Eq, value);
        }

        self.delete().await
    }

    /// Count plus a page fetch. Pages are 1-indexed.
    pub async fn paginate(self, page: u64, per_page: u64) -> Result<Page> {
        if page == 0 {
            return Err(Error::validation("page numbers start at 1"));
        }
        if per_page == 0 {
            return Err(Error::validation("per_page must be at least 1"));
        }

        let total = self.clone().count().await?;

        let mut fetch = self;
        fetch.state.limit = Some(per_page);
        fetch.state.offset = Some((page - 1) * per_page);
        let data = fetch.get().await?;

        Ok(Page {
            data,
            current_page: page,
            per_page,
            total,
            last_page: total.div_ceil(per_page).max(1),
        })
    }
}
