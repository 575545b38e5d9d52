#[macro_use]
mod fmt;
use fmt::ToSql;

mod alter;
use alter::AlterStatement;

mod delim;
use delim::{Comma, Delimited};

mod flavor;
pub use flavor::Flavor;

mod ident;
use ident::{Ident, QualifiedIdent};

mod params;
pub use params::{Params, Placeholder};

// Fragment serializers
mod column_def;
mod filter;
mod statement;
mod ty;
mod value;

use statement::CreateIndex;

use quarry_core::{driver::QueryObject, stmt, Error, Result};

/// Compiles builder IR into SQL for one dialect.
///
/// A serializer is pure: it performs no I/O, holds no mutable state and may
/// be shared freely across threads. Compiling the same statement twice
/// yields the same output.
#[derive(Debug)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,
}

struct Formatter<'a, T> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    /// Compiles a statement into one or more query/value pairs.
    ///
    /// Most statements compile to exactly one query. `ALTER TABLE` emits one
    /// query per recorded change, and `CREATE TABLE` is followed by separate
    /// index-creation queries on dialects that do not keep keys inline.
    pub fn compile(&self, stmt: &stmt::Statement) -> Result<Vec<QueryObject>> {
        match stmt {
            stmt::Statement::Create(stmt) => self.create(stmt),
            stmt::Statement::Alter(stmt) => self.alter(stmt),
            stmt::Statement::Drop(stmt) => Ok(vec![self.drop(stmt)?]),
            stmt::Statement::Rename(stmt) => Ok(vec![self.rename(stmt)?]),
            stmt::Statement::Truncate(stmt) => Ok(vec![self.truncate(stmt)?]),
            stmt::Statement::Insert(stmt) => Ok(vec![self.insert(stmt)?]),
            stmt::Statement::Update(stmt) => Ok(vec![self.update(stmt)?]),
            stmt::Statement::Delete(stmt) => Ok(vec![self.delete(stmt)?]),
            stmt::Statement::Select(stmt) => Ok(vec![self.select(stmt)?]),
        }
    }

    pub fn create(&self, stmt: &stmt::CreateTable) -> Result<Vec<QueryObject>> {
        if stmt.columns.is_empty() {
            return Err(Error::empty_statement(format!(
                "create table `{}` declares no fields",
                stmt.name
            )));
        }

        let mut queries = vec![self.render(stmt)];

        if !self.flavor.inline_keys() {
            for key in &stmt.unique_keys {
                queries.push(self.render(&CreateIndex {
                    table: &stmt.name,
                    name: &key.name,
                    columns: &key.columns,
                    unique: true,
                }));
            }
            for key in &stmt.keys {
                queries.push(self.render(&CreateIndex {
                    table: &stmt.name,
                    name: &key.name,
                    columns: &key.columns,
                    unique: false,
                }));
            }
        }

        Ok(queries)
    }

    pub fn alter(&self, stmt: &stmt::AlterTable) -> Result<Vec<QueryObject>> {
        if stmt.is_empty() {
            return Err(Error::empty_statement(format!(
                "alter table `{}` records no changes",
                stmt.name
            )));
        }

        let ops = alter::expand(stmt);

        for op in &ops {
            if !op.supported(self.flavor) {
                return Err(Error::unsupported_feature(format!(
                    "SQLite cannot {} through ALTER TABLE; recreate the table instead",
                    op.describe()
                )));
            }
        }

        Ok(ops
            .iter()
            .map(|op| {
                self.render(&AlterStatement {
                    table: &stmt.name,
                    op,
                })
            })
            .collect())
    }

    pub fn drop(&self, stmt: &stmt::DropTable) -> Result<QueryObject> {
        Ok(self.render(stmt))
    }

    pub fn rename(&self, stmt: &stmt::RenameTable) -> Result<QueryObject> {
        Ok(self.render(stmt))
    }

    pub fn truncate(&self, stmt: &stmt::Truncate) -> Result<QueryObject> {
        Ok(self.render(stmt))
    }

    pub fn insert(&self, stmt: &stmt::Insert) -> Result<QueryObject> {
        let Some(first) = stmt.rows.first() else {
            return Err(Error::empty_statement(format!(
                "insert into `{}` supplies no value rows",
                stmt.table
            )));
        };

        // The column list comes from the first row; heterogeneous rows are
        // not reconciled.
        for row in &stmt.rows[1..] {
            if !row.keys().eq(first.keys()) {
                return Err(Error::invalid_statement(format!(
                    "insert into `{}`: every row must supply the first row's column set in the same order",
                    stmt.table
                )));
            }
        }

        Ok(self.render(stmt))
    }

    pub fn update(&self, stmt: &stmt::Update) -> Result<QueryObject> {
        if stmt.assignments.is_empty() {
            return Err(Error::empty_statement(format!(
                "update of `{}` assigns no values",
                stmt.table
            )));
        }

        self.check_filters(&stmt.filters)?;
        Ok(self.render(stmt))
    }

    pub fn delete(&self, stmt: &stmt::Delete) -> Result<QueryObject> {
        if stmt.filters.is_empty() {
            return Err(Error::empty_statement(format!(
                "delete from `{}` has no filters",
                stmt.table
            )));
        }

        self.check_filters(&stmt.filters)?;
        Ok(self.render(stmt))
    }

    pub fn select(&self, stmt: &stmt::Select) -> Result<QueryObject> {
        if stmt.table.is_empty() {
            return Err(Error::empty_statement("select names no table"));
        }

        self.check_filters(&stmt.filters)?;
        Ok(self.render(stmt))
    }

    /// Placeholder rewriting is position-dependent, so each filter's `?`
    /// count must equal its value count before anything is emitted.
    fn check_filters(&self, filters: &[stmt::Filter]) -> Result<()> {
        for filter in filters {
            let placeholders = filter.placeholders();
            if placeholders != filter.values.len() {
                return Err(Error::placeholder_mismatch(placeholders, filter.values.len()));
            }
        }

        Ok(())
    }

    fn render<S: ToSql>(&self, stmt: S) -> QueryObject {
        let mut query = String::new();
        let mut values = Vec::new();

        let mut f = Formatter {
            serializer: self,
            dst: &mut query,
            params: &mut values,
        };

        stmt.to_sql(&mut f);

        QueryObject { query, values }
    }
}
