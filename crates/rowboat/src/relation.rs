use crate::{query::QueryBuilder, record::Record};

use rowboat_core::{stmt::Operator, Relation, Result};

impl Record {
    /// Resolve a declared relation into a scoped query.
    ///
    /// Resolution happens on every call and results are never cached:
    /// repeated accesses re-issue the underlying query. An unregistered
    /// relation name is a configuration error.
    pub fn relation(&self, name: &str) -> Result<QueryBuilder> {
        let relation = self
            .db()
            .registry()
            .relation(self.model_name(), name)?
            .clone();

        match relation {
            Relation::HasOne {
                related,
                foreign_key,
                local_key,
            } => Ok(self
                .db()
                .model(&related)?
                .where_(foreign_key, Operator::Eq, self.get_raw(&local_key))
                .set_is_first(true)),

            Relation::HasMany {
                related,
                foreign_key,
                local_key,
            } => Ok(self
                .db()
                .model(&related)?
                .where_(foreign_key, Operator::Eq, self.get_raw(&local_key))),

            Relation::BelongsTo {
                related,
                foreign_key,
                owner_key,
            } => Ok(self
                .db()
                .model(&related)?
                .where_(owner_key, Operator::Eq, self.get_raw(&foreign_key))
                .set_is_first(true)),

            Relation::BelongsToMany {
                related,
                pivot,
                foreign_pivot_key,
                local_pivot_key,
            } => {
                let related_model = self.db().registry().model(&related)?;
                let related_table = related_model.table.clone();
                let related_key = related_model.primary_key.clone();

                Ok(self
                    .db()
                    .model(&related)?
                    .join(
                        pivot.clone(),
                        format!("{related_table}.{related_key}"),
                        Operator::Eq,
                        format!("{pivot}.{foreign_pivot_key}"),
                    )
                    .where_(
                        format!("{pivot}.{local_pivot_key}"),
                        Operator::Eq,
                        self.get_raw(self.primary_key()),
                    ))
            }
        }
    }

    /// Resolve and execute. Each access re-issues the underlying query —
    /// singular relations come back as a vec of at most one record.
    pub async fn fetch_relation(&self, name: &str) -> Result<Vec<Record>> {
        self.relation(name)?.get().await
    }
}
