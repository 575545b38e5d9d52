use super::{Filter, Value};

use indexmap::IndexMap;

/// A statement to update rows matching a set of filters.
///
/// Assignment values become placeholders in map order; filter values follow
/// them in filter order.
#[derive(Debug, Clone)]
pub struct Update {
    /// Name of the table
    pub table: String,

    /// Column assignments, in insertion order
    pub assignments: IndexMap<String, Value>,

    /// AND-joined filters
    pub filters: Vec<Filter>,
}

impl Update {
    pub fn new(table: impl Into<String>) -> Update {
        Update {
            table: table.into(),
            assignments: IndexMap::new(),
            filters: vec![],
        }
    }
}
