use super::{ColumnDef, ForeignKey, Key};

/// A statement to alter a SQL table.
///
/// Each recorded change compiles to its own statement; the compiler emits
/// them in a fixed order that places removals before additions. There is no
/// atomicity across the emitted statements — callers needing all-or-nothing
/// semantics must wrap execution in a transaction.
#[derive(Debug, Clone)]
pub struct AlterTable {
    /// Name of the table
    pub name: String,

    pub drop_columns: Vec<String>,
    pub add_columns: Vec<ColumnDef>,
    pub change_columns: Vec<ColumnDef>,

    pub drop_primary_key: bool,
    pub add_primary_key: Option<Vec<String>>,

    pub drop_unique_keys: Vec<String>,
    pub add_unique_keys: Vec<Key>,

    pub drop_keys: Vec<String>,
    pub add_keys: Vec<Key>,

    pub drop_foreign_keys: Vec<String>,
    pub add_foreign_keys: Vec<ForeignKey>,
}

impl AlterTable {
    pub fn new(name: impl Into<String>) -> AlterTable {
        AlterTable {
            name: name.into(),
            drop_columns: vec![],
            add_columns: vec![],
            change_columns: vec![],
            drop_primary_key: false,
            add_primary_key: None,
            drop_unique_keys: vec![],
            add_unique_keys: vec![],
            drop_keys: vec![],
            add_keys: vec![],
            drop_foreign_keys: vec![],
            add_foreign_keys: vec![],
        }
    }

    /// Returns `true` when no changes have been recorded.
    pub fn is_empty(&self) -> bool {
        self.drop_columns.is_empty()
            && self.add_columns.is_empty()
            && self.change_columns.is_empty()
            && !self.drop_primary_key
            && self.add_primary_key.is_none()
            && self.drop_unique_keys.is_empty()
            && self.add_unique_keys.is_empty()
            && self.drop_keys.is_empty()
            && self.add_keys.is_empty()
            && self.drop_foreign_keys.is_empty()
            && self.add_foreign_keys.is_empty()
    }
}
