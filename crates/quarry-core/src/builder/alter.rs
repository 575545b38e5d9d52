use super::check_key_names;
use crate::{stmt, Error, Result};

/// Accumulates an `ALTER TABLE` statement.
///
/// Each recorded change becomes one emitted statement; removals always
/// compile before additions of the same kind.
#[derive(Debug, Clone)]
pub struct Alter {
    stmt: stmt::AlterTable,
}

impl Alter {
    pub fn new(table: impl Into<String>) -> Alter {
        Alter {
            stmt: stmt::AlterTable::new(table),
        }
    }

    pub fn add_field(&mut self, column: stmt::ColumnDef) -> &mut Self {
        self.stmt.add_columns.push(column);
        self
    }

    pub fn drop_field(&mut self, name: impl Into<String>) -> &mut Self {
        self.stmt.drop_columns.push(name.into());
        self
    }

    /// Redeclares an existing column's shape. The column keeps its name.
    pub fn change_field(&mut self, column: stmt::ColumnDef) -> &mut Self {
        self.stmt.change_columns.push(column);
        self
    }

    pub fn add_primary_key<I, S>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stmt.add_primary_key = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn drop_primary_key(&mut self) -> &mut Self {
        self.stmt.drop_primary_key = true;
        self
    }

    pub fn add_unique_key(&mut self, key: stmt::Key) -> &mut Self {
        self.stmt.add_unique_keys.push(key);
        self
    }

    pub fn drop_unique_key(&mut self, name: impl Into<String>) -> &mut Self {
        self.stmt.drop_unique_keys.push(name.into());
        self
    }

    pub fn add_key(&mut self, key: stmt::Key) -> &mut Self {
        self.stmt.add_keys.push(key);
        self
    }

    pub fn drop_key(&mut self, name: impl Into<String>) -> &mut Self {
        self.stmt.drop_keys.push(name.into());
        self
    }

    pub fn add_foreign_key(&mut self, foreign_key: stmt::ForeignKey) -> &mut Self {
        self.stmt.add_foreign_keys.push(foreign_key);
        self
    }

    pub fn drop_foreign_key(&mut self, name: impl Into<String>) -> &mut Self {
        self.stmt.drop_foreign_keys.push(name.into());
        self
    }

    /// Emits a snapshot of the accumulated statement.
    pub fn build(&self) -> Result<stmt::AlterTable> {
        if self.stmt.is_empty() {
            return Err(Error::empty_statement(format!(
                "alter table `{}` records no changes",
                self.stmt.name
            )));
        }

        check_key_names(
            self.stmt
                .add_unique_keys
                .iter()
                .chain(&self.stmt.add_keys)
                .map(|key| key.name.as_str())
                .chain(
                    self.stmt
                        .add_foreign_keys
                        .iter()
                        .map(|fk| fk.name.as_str()),
                ),
        )?;

        Ok(self.stmt.clone())
    }
}
