/// Declared metadata describing how one model relates to another.
///
/// Descriptors are registered once per model and resolved lazily into
/// scoped queries on each access; the resolved records are never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relation {
    /// One related row holding our key: `related.foreign_key = self.local_key`.
    HasOne {
        related: String,
        foreign_key: String,
        local_key: String,
    },

    /// Many related rows holding our key.
    HasMany {
        related: String,
        foreign_key: String,
        local_key: String,
    },

    /// We hold the related row's key: `related.owner_key = self.foreign_key`.
    BelongsTo {
        related: String,
        foreign_key: String,
        owner_key: String,
    },

    /// Many-to-many through a pivot table.
    BelongsToMany {
        related: String,
        pivot: String,
        foreign_pivot_key: String,
        local_pivot_key: String,
    },
}

impl Relation {
    pub fn related(&self) -> &str {
        match self {
            Self::HasOne { related, .. }
            | Self::HasMany { related, .. }
            | Self::BelongsTo { related, .. }
            | Self::BelongsToMany { related, .. } => related,
        }
    }

    /// True when resolving this relation yields at most one record.
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::HasOne { .. } | Self::BelongsTo { .. })
    }
}
