use super::Operator;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
}

impl JoinKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
        }
    }
}

/// One join clause. Joins are a flat list; there is no nested grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub table: String,
    pub local_key: String,
    pub op: Operator,
    pub foreign_key: String,
    pub kind: JoinKind,
}

impl Join {
    pub fn new(
        table: impl Into<String>,
        local_key: impl Into<String>,
        op: Operator,
        foreign_key: impl Into<String>,
        kind: JoinKind,
    ) -> Self {
        Self {
            table: table.into(),
            local_key: local_key.into(),
            op,
            foreign_key: foreign_key.into(),
            kind,
        }
    }
}
