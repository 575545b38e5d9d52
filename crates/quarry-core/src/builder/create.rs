use super::check_key_names;
use crate::{stmt, Error, Result};

/// Accumulates a `CREATE TABLE` statement.
#[derive(Debug, Clone)]
pub struct Create {
    stmt: stmt::CreateTable,
}

impl Create {
    pub fn new(table: impl Into<String>) -> Create {
        Create {
            stmt: stmt::CreateTable::new(table),
        }
    }

    pub fn add_field(&mut self, column: stmt::ColumnDef) -> &mut Self {
        self.stmt.columns.push(column);
        self
    }

    pub fn add_primary_key<I, S>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stmt.primary_key = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn add_unique_key(&mut self, key: stmt::Key) -> &mut Self {
        self.stmt.unique_keys.push(key);
        self
    }

    pub fn add_key(&mut self, key: stmt::Key) -> &mut Self {
        self.stmt.keys.push(key);
        self
    }

    pub fn add_foreign_key(&mut self, foreign_key: stmt::ForeignKey) -> &mut Self {
        self.stmt.foreign_keys.push(foreign_key);
        self
    }

    /// Emits a snapshot of the accumulated statement.
    pub fn build(&self) -> Result<stmt::CreateTable> {
        if self.stmt.columns.is_empty() {
            return Err(Error::empty_statement(format!(
                "create table `{}` declares no fields",
                self.stmt.name
            )));
        }

        check_key_names(
            self.stmt
                .unique_keys
                .iter()
                .chain(&self.stmt.keys)
                .map(|key| key.name.as_str())
                .chain(self.stmt.foreign_keys.iter().map(|fk| fk.name.as_str())),
        )?;

        Ok(self.stmt.clone())
    }
}
