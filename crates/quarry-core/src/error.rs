/// An error raised while building or compiling a statement.
///
/// All errors are local, synchronous validation failures. Nothing here is
/// transient: a statement that fails to compile will fail the same way on
/// every attempt until the caller changes its description.
pub struct Error {
    kind: ErrorKind,
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    EmptyStatement(Box<str>),
    InvalidStatement(Box<str>),
    PlaceholderMismatch { placeholders: usize, values: usize },
    UnsupportedFeature(Box<str>),
}

impl Error {
    /// Creates an error for a statement missing required state.
    ///
    /// This occurs when:
    /// - A `CREATE TABLE` has zero fields
    /// - An `ALTER TABLE` records zero changes
    /// - An `INSERT` has zero value rows
    /// - An `UPDATE` has an empty set-map
    /// - A `DELETE` has no filters
    /// - A `SELECT` names no table
    pub fn empty_statement(message: impl Into<String>) -> Error {
        Error {
            kind: ErrorKind::EmptyStatement(message.into().into()),
        }
    }

    /// Returns `true` if this error is an empty statement error.
    pub fn is_empty_statement(&self) -> bool {
        matches!(self.kind, ErrorKind::EmptyStatement(_))
    }

    /// Creates an error for a structurally invalid statement.
    ///
    /// This occurs when a statement is malformed in a way the builder can
    /// detect without a schema, such as duplicate key names within one
    /// statement or insert rows that do not share the first row's columns.
    pub fn invalid_statement(message: impl Into<String>) -> Error {
        Error {
            kind: ErrorKind::InvalidStatement(message.into().into()),
        }
    }

    /// Returns `true` if this error is an invalid statement error.
    pub fn is_invalid_statement(&self) -> bool {
        matches!(self.kind, ErrorKind::InvalidStatement(_))
    }

    /// Creates an error for a filter whose `?` placeholder count does not
    /// match the number of supplied values.
    ///
    /// Placeholder rewriting is position-dependent, so too few and too many
    /// values are both invalid.
    pub fn placeholder_mismatch(placeholders: usize, values: usize) -> Error {
        Error {
            kind: ErrorKind::PlaceholderMismatch {
                placeholders,
                values,
            },
        }
    }

    /// Returns `true` if this error is a placeholder mismatch error.
    pub fn is_placeholder_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::PlaceholderMismatch { .. })
    }

    /// Creates an error for an operation the target dialect cannot express,
    /// such as dropping a primary key under SQLite.
    pub fn unsupported_feature(message: impl Into<String>) -> Error {
        Error {
            kind: ErrorKind::UnsupportedFeature(message.into().into()),
        }
    }

    /// Returns `true` if this error is an unsupported feature error.
    pub fn is_unsupported_feature(&self) -> bool {
        matches!(self.kind, ErrorKind::UnsupportedFeature(_))
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.kind {
            ErrorKind::Anyhow(err) => core::fmt::Display::fmt(err, f),
            ErrorKind::EmptyStatement(message) => write!(f, "empty statement: {message}"),
            ErrorKind::InvalidStatement(message) => write!(f, "invalid statement: {message}"),
            ErrorKind::PlaceholderMismatch {
                placeholders,
                values,
            } => write!(
                f,
                "placeholder mismatch: statement has {placeholders} placeholder(s) but {values} value(s) were supplied"
            ),
            ErrorKind::UnsupportedFeature(message) => {
                write!(f, "unsupported feature: {message}")
            }
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Error({:?})", self.kind)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Anyhow(err) => err.source(),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Error {
        Error {
            kind: ErrorKind::Anyhow(err),
        }
    }
}
