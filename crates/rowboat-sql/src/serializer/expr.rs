use super::{Formatter, Params, ToSql};

use rowboat_core::stmt::{Join, Operator, OrderBy, Value, Where};

impl ToSql for Operator {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, self.as_str());
    }
}

impl ToSql for &Value {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            // Lists render as a parenthesized placeholder tuple, one
            // parameter per element.
            Value::List(items) => {
                fmt!(f, "(");
                let mut s = "";
                for item in items {
                    fmt!(f, s item);
                    s = ", ";
                }
                fmt!(f, ")");
            }
            value => {
                let placeholder = f.params.push(value);
                fmt!(f, placeholder);
            }
        }
    }
}

impl ToSql for &Where {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let value = &self.value;
        fmt!(f, self.column.as_str() " " self.op " " value);
    }
}

/// Renders a flat where list in declaration order, joining consecutive
/// clauses with each clause's own connective. No precedence grouping.
pub(super) struct FilterList<'a>(pub(super) &'a [Where]);

impl ToSql for FilterList<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        for (i, clause) in self.0.iter().enumerate() {
            if i > 0 {
                fmt!(f, " " clause.connective.as_str() " ");
            }
            fmt!(f, clause);
        }
    }
}

impl ToSql for &Join {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(
            f,
            self.kind.as_str() " " self.table.as_str()
            " ON " self.local_key.as_str() " " self.op " " self.foreign_key.as_str()
        );
    }
}

impl ToSql for &OrderBy {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, self.column.as_str() " " self.direction.as_str());
    }
}
