use super::Serializer;

/// The SQL family being targeted.
///
/// Everything a compiler function needs to know about a dialect lives here
/// and in the type table; the statement serializers themselves are
/// dialect-parametric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Mysql,
    Postgresql,
    Sqlite,
}

impl Flavor {
    /// The dialect's single identifier quote character.
    pub(super) fn quote(self) -> char {
        match self {
            Flavor::Postgresql => '"',
            Flavor::Mysql | Flavor::Sqlite => '`',
        }
    }

    pub(super) fn boolean_literal(self, value: bool) -> &'static str {
        match self {
            // SQLite has no boolean literals
            Flavor::Sqlite => {
                if value {
                    "1"
                } else {
                    "0"
                }
            }
            Flavor::Mysql | Flavor::Postgresql => {
                if value {
                    "TRUE"
                } else {
                    "FALSE"
                }
            }
        }
    }

    /// MySQL keeps unique keys and indexes inline in `CREATE TABLE`; the
    /// others emit separate `CREATE INDEX` statements.
    pub(super) fn inline_keys(self) -> bool {
        matches!(self, Flavor::Mysql)
    }

    /// MySQL has no `RETURNING` clause; the compiler omits it there.
    pub(super) fn supports_returning(self) -> bool {
        !matches!(self, Flavor::Mysql)
    }
}

impl Serializer {
    pub fn mysql() -> Serializer {
        Serializer {
            flavor: Flavor::Mysql,
        }
    }

    pub fn postgresql() -> Serializer {
        Serializer {
            flavor: Flavor::Postgresql,
        }
    }

    pub fn sqlite() -> Serializer {
        Serializer {
            flavor: Flavor::Sqlite,
        }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub(super) fn is_mysql(&self) -> bool {
        matches!(self.flavor, Flavor::Mysql)
    }

    pub(super) fn is_sqlite(&self) -> bool {
        matches!(self.flavor, Flavor::Sqlite)
    }
}
