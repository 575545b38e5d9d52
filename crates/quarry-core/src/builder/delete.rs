use crate::{stmt, Error, Result};

/// Accumulates a `DELETE` statement.
///
/// At least one filter is required: an unconditional full-table delete is
/// refused at build time.
#[derive(Debug, Clone)]
pub struct Delete {
    stmt: stmt::Delete,
}

impl Delete {
    pub fn new(table: impl Into<String>) -> Delete {
        Delete {
            stmt: stmt::Delete::new(table),
        }
    }

    pub fn filter(
        &mut self,
        condition: impl Into<String>,
        values: Vec<stmt::Value>,
    ) -> &mut Self {
        self.stmt.filters.push(stmt::Filter::new(condition, values));
        self
    }

    /// Emits a snapshot of the accumulated statement.
    pub fn build(&self) -> Result<stmt::Delete> {
        if self.stmt.filters.is_empty() {
            return Err(Error::empty_statement(format!(
                "delete from `{}` has no filters",
                self.stmt.table
            )));
        }

        Ok(self.stmt.clone())
    }
}
