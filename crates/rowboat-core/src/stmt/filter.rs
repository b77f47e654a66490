use super::{Operator, Value};

/// How a where clause attaches to the one before it.
///
/// Clauses form a flat ordered list. Mixed AND/OR chains compile
/// left-to-right with no parenthesized grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

/// One where (or having) condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Where {
    pub column: String,
    pub op: Operator,
    pub value: Value,
    pub connective: Connective,
}

impl Where {
    pub fn new(
        column: impl Into<String>,
        op: Operator,
        value: impl Into<Value>,
        connective: Connective,
    ) -> Self {
        Self {
            column: column.into(),
            op,
            value: value.into(),
            connective,
        }
    }
}
