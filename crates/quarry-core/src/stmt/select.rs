use super::{Filter, Join, OrderBy};

/// A statement to select rows.
#[derive(Debug, Clone)]
pub struct Select {
    /// Name of the table
    pub table: String,

    /// Table alias; rendered only when it differs from the table name
    pub alias: Option<String>,

    /// Columns to select. Entries may themselves be comma-separated lists;
    /// the compiler flattens them. Empty means `*`.
    pub columns: Vec<String>,

    /// Join relations, in declaration order
    pub joins: Vec<Join>,

    /// AND-joined filters
    pub filters: Vec<Filter>,

    /// Sort order
    pub order_by: Vec<OrderBy>,

    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl Select {
    pub fn new(table: impl Into<String>) -> Select {
        Select {
            table: table.into(),
            alias: None,
            columns: vec![],
            joins: vec![],
            filters: vec![],
            order_by: vec![],
            limit: None,
            offset: None,
        }
    }
}
