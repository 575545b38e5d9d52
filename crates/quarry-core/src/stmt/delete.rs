use super::Filter;

/// A statement to delete rows matching a set of filters.
///
/// At least one filter is required; the compiler refuses to render an
/// unconditional full-table delete.
#[derive(Debug, Clone)]
pub struct Delete {
    /// Name of the table
    pub table: String,

    /// AND-joined filters
    pub filters: Vec<Filter>,
}

impl Delete {
    pub fn new(table: impl Into<String>) -> Delete {
        Delete {
            table: table.into(),
            filters: vec![],
        }
    }
}
