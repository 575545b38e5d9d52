use super::{ColumnDef, ForeignKey, Key};

/// A statement to create a SQL table.
#[derive(Debug, Clone)]
pub struct CreateTable {
    /// Name of the table
    pub name: String,

    /// Column definitions
    pub columns: Vec<ColumnDef>,

    /// Primary key column list, if any. Primary keys carry no name.
    pub primary_key: Option<Vec<String>>,

    /// Named unique keys
    pub unique_keys: Vec<Key>,

    /// Named plain indexes
    pub keys: Vec<Key>,

    /// Foreign key constraints
    pub foreign_keys: Vec<ForeignKey>,
}

impl CreateTable {
    pub fn new(name: impl Into<String>) -> CreateTable {
        CreateTable {
            name: name.into(),
            columns: vec![],
            primary_key: None,
            unique_keys: vec![],
            keys: vec![],
            foreign_keys: vec![],
        }
    }
}
