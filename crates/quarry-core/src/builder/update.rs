use crate::{stmt, Error, Result};

/// Accumulates an `UPDATE` statement.
#[derive(Debug, Clone)]
pub struct Update {
    stmt: stmt::Update,
}

impl Update {
    pub fn new(table: impl Into<String>) -> Update {
        Update {
            stmt: stmt::Update::new(table),
        }
    }

    /// Assigns a value to a column. Re-assigning a column keeps its original
    /// position in the set-map.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<stmt::Value>) -> &mut Self {
        self.stmt.assignments.insert(column.into(), value.into());
        self
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
    pub fn build(&self) -> Result<stmt::Update> {
        if self.stmt.assignments.is_empty() {
            return Err(Error::empty_statement(format!(
                "update of `{}` assigns no values",
                self.stmt.table
            )));
        }

        Ok(self.stmt.clone())
    }
}
