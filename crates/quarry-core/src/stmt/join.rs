#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
}

/// A join relation in a `SELECT` statement.
#[derive(Debug, Clone)]
pub struct Join {
    pub kind: JoinKind,
    pub table: String,
    pub alias: Option<String>,

    /// Left side of the `ON` condition, usually qualified (`u.id`).
    pub from_column: String,

    /// Right side of the `ON` condition.
    pub to_column: String,
}
