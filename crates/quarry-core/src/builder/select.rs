use crate::{stmt, Error, Result};

/// Accumulates a `SELECT` statement.
#[derive(Debug, Clone, Default)]
pub struct Select {
    table: Option<String>,
    alias: Option<String>,
    columns: Vec<String>,
    joins: Vec<stmt::Join>,
    filters: Vec<stmt::Filter>,
    order_by: Vec<stmt::OrderBy>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl Select {
    pub fn new() -> Select {
        Select::default()
    }

    /// Sets the source table, with no alias.
    pub fn from(&mut self, table: impl Into<String>) -> &mut Self {
        self.table = Some(table.into());
        self.alias = None;
        self
    }

    /// Sets the source table with an alias. The alias is rendered only when
    /// it differs from the table name.
    pub fn from_as(&mut self, table: impl Into<String>, alias: impl Into<String>) -> &mut Self {
        self.table = Some(table.into());
        self.alias = Some(alias.into());
        self
    }

    /// Appends columns to select. Entries may be comma-separated lists; the
    /// compiler flattens them.
    pub fn columns<I, S>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    pub fn join(
        &mut self,
        table: impl Into<String>,
        alias: Option<String>,
        from_column: impl Into<String>,
        to_column: impl Into<String>,
    ) -> &mut Self {
        self.push_join(stmt::JoinKind::Inner, table, alias, from_column, to_column)
    }

    pub fn left_join(
        &mut self,
        table: impl Into<String>,
        alias: Option<String>,
        from_column: impl Into<String>,
        to_column: impl Into<String>,
    ) -> &mut Self {
        self.push_join(stmt::JoinKind::Left, table, alias, from_column, to_column)
    }

    pub fn right_join(
        &mut self,
        table: impl Into<String>,
        alias: Option<String>,
        from_column: impl Into<String>,
        to_column: impl Into<String>,
    ) -> &mut Self {
        self.push_join(stmt::JoinKind::Right, table, alias, from_column, to_column)
    }

    fn push_join(
        &mut self,
        kind: stmt::JoinKind,
        table: impl Into<String>,
        alias: Option<String>,
        from_column: impl Into<String>,
        to_column: impl Into<String>,
    ) -> &mut Self {
        self.joins.push(stmt::Join {
            kind,
            table: table.into(),
            alias,
            from_column: from_column.into(),
            to_column: to_column.into(),
        });
        self
    }

    pub fn filter(
        &mut self,
        condition: impl Into<String>,
        values: Vec<stmt::Value>,
    ) -> &mut Self {
        self.filters.push(stmt::Filter::new(condition, values));
        self
    }

    pub fn order_by(&mut self, column: impl Into<String>, direction: stmt::Direction) -> &mut Self {
        self.order_by.push(stmt::OrderBy {
            column: column.into(),
            direction,
        });
        self
    }

    pub fn limit(&mut self, limit: u64) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(&mut self, offset: u64) -> &mut Self {
        self.offset = Some(offset);
        self
    }

    /// Emits a snapshot of the accumulated statement.
    pub fn build(&self) -> Result<stmt::Select> {
        let Some(table) = &self.table else {
            return Err(Error::empty_statement("select names no table"));
        };

        Ok(stmt::Select {
            table: table.clone(),
            alias: self.alias.clone(),
            columns: self.columns.clone(),
            joins: self.joins.clone(),
            filters: self.filters.clone(),
            order_by: self.order_by.clone(),
            limit: self.limit,
            offset: self.offset,
        })
    }
}
