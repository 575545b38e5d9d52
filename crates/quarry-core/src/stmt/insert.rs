use super::Value;

use indexmap::IndexMap;

/// A statement to insert one or more rows.
///
/// The column list is taken from the keys of the first row; every row must
/// supply exactly that column set in that order. The compiler does not
/// reconcile heterogeneous rows.
#[derive(Debug, Clone)]
pub struct Insert {
    /// Name of the table
    pub table: String,

    /// Value rows, in insertion order
    pub rows: Vec<IndexMap<String, Value>>,

    /// Columns to return from the statement, for dialects that support a
    /// `RETURNING` clause. MySQL omits the clause entirely.
    pub returning: Option<Vec<String>>,
}

impl Insert {
    pub fn new(table: impl Into<String>) -> Insert {
        Insert {
            table: table.into(),
            rows: vec![],
            returning: None,
        }
    }
}
