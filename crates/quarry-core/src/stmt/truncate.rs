/// A statement to remove all rows from a table.
///
/// The `cascade` flag is honored only by dialects that support it
/// (PostgreSQL). MySQL and SQLite ignore it at the statement-text level, so
/// callers must not rely on cascade semantics there.
#[derive(Debug, Clone)]
pub struct Truncate {
    /// Name of the table
    pub name: String,

    pub cascade: bool,
}

impl Truncate {
    pub fn new(name: impl Into<String>) -> Truncate {
        Truncate {
            name: name.into(),
            cascade: false,
        }
    }

    pub fn cascade(name: impl Into<String>) -> Truncate {
        Truncate {
            name: name.into(),
            cascade: true,
        }
    }
}
