/// A statement to rename a SQL table.
#[derive(Debug, Clone)]
pub struct RenameTable {
    pub from: String,
    pub to: String,
}

impl RenameTable {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> RenameTable {
        RenameTable {
            from: from.into(),
            to: to.into(),
        }
    }
}
