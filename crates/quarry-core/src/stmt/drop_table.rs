/// A statement to drop a SQL table.
#[derive(Debug, Clone)]
pub struct DropTable {
    /// Name of the table
    pub name: String,

    /// Whether or not to add an `IF EXISTS` clause
    pub if_exists: bool,
}

impl DropTable {
    /// Drops a table.
    ///
    /// This function _does not_ add an `IF EXISTS` clause.
    pub fn new(name: impl Into<String>) -> DropTable {
        DropTable {
            name: name.into(),
            if_exists: false,
        }
    }

    /// Drops a table if it exists.
    ///
    /// This function _does_ add an `IF EXISTS` clause.
    pub fn if_exists(name: impl Into<String>) -> DropTable {
        DropTable {
            name: name.into(),
            if_exists: true,
        }
    }
}
