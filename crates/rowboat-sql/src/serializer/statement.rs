use super::{expr::FilterList, Comma, Formatter, Params, ToSql};

use rowboat_core::stmt::{Query, Row, Value};

/// SELECT, rendered as: column list (or `*`), FROM, joins in declared
/// order, wheres in declared order, GROUP BY, HAVING, ORDER BY, LIMIT,
/// OFFSET.
pub(super) struct Select<'a> {
    pub(super) query: &'a Query,
    pub(super) count: bool,
}

impl ToSql for Select<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let query = self.query;

        fmt!(f, "SELECT ");

        if self.count {
            // The configured select list does not apply to the aggregate.
            fmt!(f, "COUNT(*) AS count");
        } else {
            if query.distinct {
                fmt!(f, "DISTINCT ");
            }

            if query.selects.is_empty() && query.raw_selects.is_empty() {
                fmt!(f, "*");
            } else {
                fmt!(f, Comma(query.selects.iter().chain(&query.raw_selects)));
            }
        }

        fmt!(f, " FROM " query.from.as_str());

        for join in &query.joins {
            fmt!(f, " " join);
        }

        if !query.wheres.is_empty() {
            fmt!(f, " WHERE " FilterList(&query.wheres));
        }

        if !query.groups.is_empty() {
            fmt!(f, " GROUP BY " Comma(query.groups.iter()));
        }

        if !query.havings.is_empty() {
            fmt!(f, " HAVING " FilterList(&query.havings));
        }

        if !self.count {
            if !query.orders.is_empty() {
                fmt!(f, " ORDER BY " Comma(query.orders.iter()));
            }

            if let Some(limit) = query.limit {
                fmt!(f, " LIMIT " limit);
            }

            if let Some(offset) = query.offset {
                fmt!(f, " OFFSET " offset);
            }
        }
    }
}

/// INSERT with one or many value tuples. Columns come from the first row;
/// later rows fill missing keys with NULL parameters.
pub(super) struct Insert<'a> {
    pub(super) table: &'a str,
    pub(super) rows: &'a [Row],
}

impl ToSql for Insert<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let columns: Vec<&String> = match self.rows.first() {
            Some(row) => row.keys().collect(),
            None => Vec::new(),
        };

        fmt!(
            f,
            "INSERT INTO " self.table " (" Comma(columns.iter().copied()) ") VALUES "
        );

        let mut row_delim = "";
        for row in self.rows {
            fmt!(f, row_delim "(");

            let mut s = "";
            for column in &columns {
                let value = row.get(*column).cloned().unwrap_or(Value::Null);
                let value = &value;
                fmt!(f, s value);
                s = ", ";
            }

            fmt!(f, ")");
            row_delim = ", ";
        }
    }
}

/// UPDATE over exactly the passed assignments, scoped by the accumulated
/// wheres.
pub(super) struct Update<'a> {
    pub(super) query: &'a Query,
    pub(super) assignments: &'a Row,
}

impl ToSql for Update<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, "UPDATE " self.query.from.as_str() " SET ");

        let mut s = "";
        for (column, value) in self.assignments {
            fmt!(f, s column " = " value);
            s = ", ";
        }

        if !self.query.wheres.is_empty() {
            fmt!(f, " WHERE " FilterList(&self.query.wheres));
        }
    }
}

pub(super) struct Delete<'a> {
    pub(super) query: &'a Query,
}

impl ToSql for Delete<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, "DELETE FROM " self.query.from.as_str());

        if !self.query.wheres.is_empty() {
            fmt!(f, " WHERE " FilterList(&self.query.wheres));
        }
    }
}
