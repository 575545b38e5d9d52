use crate::{stmt, Error, Result};

use indexmap::IndexMap;

/// Accumulates an `INSERT` statement.
#[derive(Debug, Clone)]
pub struct Insert {
    stmt: stmt::Insert,
}

impl Insert {
    pub fn new(table: impl Into<String>) -> Insert {
        Insert {
            stmt: stmt::Insert::new(table),
        }
    }

    /// Appends one value row.
    pub fn row(&mut self, row: IndexMap<String, stmt::Value>) -> &mut Self {
        self.stmt.rows.push(row);
        self
    }

    /// Appends multiple value rows.
    pub fn values<I>(&mut self, rows: I) -> &mut Self
    where
        I: IntoIterator<Item = IndexMap<String, stmt::Value>>,
    {
        self.stmt.rows.extend(rows);
        self
    }

    /// Requests a `RETURNING` clause for dialects that support one.
    pub fn returning<I, S>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stmt.returning = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    /// Emits a snapshot of the accumulated statement.
    pub fn build(&self) -> Result<stmt::Insert> {
        if self.stmt.rows.is_empty() {
            return Err(Error::empty_statement(format!(
                "insert into `{}` supplies no value rows",
                self.stmt.table
            )));
        }

        Ok(self.stmt.clone())
    }
}
