use crate::Serializer;

use quarry_core::{
    driver::{Connection, QueryObject, Row},
    stmt::Statement,
    Result,
};

/// Dispatches compiled statements to a connection.
///
/// When a statement compiles to several queries (an `ALTER TABLE` with
/// multiple changes, a `CREATE TABLE` with separate index statements), they
/// execute in order with no implicit transaction. Callers needing
/// all-or-nothing semantics wrap the call in [`begin`]/[`commit`].
///
/// [`begin`]: Engine::begin
/// [`commit`]: Engine::commit
#[derive(Debug)]
pub struct Engine {
    serializer: Serializer,
    connection: Box<dyn Connection>,
}

impl Engine {
    pub fn new(serializer: Serializer, connection: Box<dyn Connection>) -> Engine {
        Engine {
            serializer,
            connection,
        }
    }

    pub fn serializer(&self) -> &Serializer {
        &self.serializer
    }

    pub fn connection(&self) -> &dyn Connection {
        &*self.connection
    }

    /// Compiles and executes a statement, returning the result rows of the
    /// last emitted query.
    pub async fn query(&self, stmt: &Statement) -> Result<Vec<Row>> {
        let mut rows = vec![];

        for query in self.serializer.compile(stmt)? {
            rows = self.dispatch(query).await?;
        }

        Ok(rows)
    }

    /// Compiles and executes a statement, returning the total number of
    /// affected rows across the emitted queries.
    pub async fn exec(&self, stmt: &Statement) -> Result<u64> {
        let mut affected = 0;

        for query in self.serializer.compile(stmt)? {
            let formatted = self.connection.format(query);
            affected += self.connection.exec(formatted).await?;
        }

        Ok(affected)
    }

    pub async fn begin(&self) -> Result<()> {
        self.connection.begin().await
    }

    pub async fn commit(&self) -> Result<()> {
        self.connection.commit().await
    }

    pub async fn rollback(&self) -> Result<()> {
        self.connection.rollback().await
    }

    async fn dispatch(&self, query: QueryObject) -> Result<Vec<Row>> {
        let formatted = self.connection.format(query);
        self.connection.query(formatted).await
    }
}
