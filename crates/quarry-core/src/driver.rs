//! The execution contract between the compiler core and database drivers.
//!
//! The core itself performs no I/O; it hands [`QueryObject`]s to a
//! [`Connection`] implementation wrapping a native driver. Drivers own
//! value coercion, transactions and last-insert-id tracking.

use crate::{stmt::Value, Result};

use std::fmt::Debug;

use async_trait::async_trait;

/// The compiler's output unit: rendered SQL text plus the ordered parameter
/// list bound to its placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryObject {
    pub query: String,
    pub values: Vec<Value>,
}

impl QueryObject {
    pub fn new(query: impl Into<String>, values: Vec<Value>) -> QueryObject {
        QueryObject {
            query: query.into(),
            values,
        }
    }
}

/// One result row, positionally ordered.
pub type Row = Vec<Value>;

/// A live database connection wrapping a native driver.
///
/// Implementations are thin pass-through adapters; they carry no statement
/// logic of their own.
#[async_trait]
pub trait Connection: Debug + Send + Sync + 'static {
    /// Driver-specific value coercion applied before dispatch, e.g.
    /// boolean to 0/1 for drivers without a boolean bind type.
    fn format(&self, query: QueryObject) -> QueryObject {
        query
    }

    /// Execute a statement and return its result rows.
    async fn query(&self, query: QueryObject) -> Result<Vec<Row>>;

    /// Execute a statement, returning the number of affected rows.
    async fn exec(&self, query: QueryObject) -> Result<u64>;

    async fn begin(&self) -> Result<()>;

    async fn commit(&self) -> Result<()>;

    async fn rollback(&self) -> Result<()>;

    /// Identifier of the last row inserted through this connection, when the
    /// driver tracks one.
    fn last_insert_id(&self) -> Option<i64> {
        None
    }
}
