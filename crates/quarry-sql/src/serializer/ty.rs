use super::Flavor;

use quarry_core::stmt::Length;

/// Generic-type → native-type tables. Together with [`Flavor`]'s quote
/// character these are the only place dialect-specific knowledge lives;
/// the statement serializers read from them instead of hard-coding names.
const MYSQL: &[(&str, &str)] = &[
    ("int", "INT"),
    ("integer", "INT"),
    ("tinyint", "TINYINT"),
    ("smallint", "SMALLINT"),
    ("mediumint", "MEDIUMINT"),
    ("bigint", "BIGINT"),
    ("varchar", "VARCHAR"),
    ("char", "CHAR"),
    ("text", "TEXT"),
    ("json", "JSON"),
    ("boolean", "BOOLEAN"),
    ("bool", "BOOLEAN"),
    ("datetime", "DATETIME"),
    ("timestamp", "TIMESTAMP"),
    ("date", "DATE"),
    ("time", "TIME"),
    ("float", "FLOAT"),
    ("double", "DOUBLE"),
    ("decimal", "DECIMAL"),
    ("blob", "BLOB"),
];

const POSTGRESQL: &[(&str, &str)] = &[
    ("int", "INTEGER"),
    ("integer", "INTEGER"),
    ("tinyint", "SMALLINT"),
    ("smallint", "SMALLINT"),
    ("mediumint", "INTEGER"),
    ("bigint", "BIGINT"),
    ("varchar", "VARCHAR"),
    ("char", "CHAR"),
    ("text", "TEXT"),
    ("json", "JSONB"),
    ("boolean", "BOOLEAN"),
    ("bool", "BOOLEAN"),
    ("datetime", "TIMESTAMP"),
    ("timestamp", "TIMESTAMP"),
    ("date", "DATE"),
    ("time", "TIME"),
    ("float", "REAL"),
    ("double", "DOUBLE PRECISION"),
    ("decimal", "NUMERIC"),
    ("blob", "BYTEA"),
];

const SQLITE: &[(&str, &str)] = &[
    ("int", "INTEGER"),
    ("integer", "INTEGER"),
    ("tinyint", "SMALLINT"),
    ("smallint", "SMALLINT"),
    ("mediumint", "INTEGER"),
    ("bigint", "BIGINT"),
    ("varchar", "VARCHAR"),
    ("char", "CHAR"),
    ("text", "TEXT"),
    ("json", "TEXT"),
    ("boolean", "BOOLEAN"),
    ("bool", "BOOLEAN"),
    ("datetime", "DATETIME"),
    ("timestamp", "TIMESTAMP"),
    ("date", "DATE"),
    ("time", "TIME"),
    ("float", "REAL"),
    ("double", "DOUBLE"),
    ("decimal", "DECIMAL"),
    ("blob", "BLOB"),
];

/// Integer "lengths" select a width rather than rendering a display width.
const DEFAULT_INTEGER_WIDTH: u32 = 11;

/// `CHAR`/`VARCHAR` columns default to this length when none is declared.
const DEFAULT_CHAR_LENGTH: u32 = 255;

impl Flavor {
    fn type_map(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Flavor::Mysql => MYSQL,
            Flavor::Postgresql => POSTGRESQL,
            Flavor::Sqlite => SQLITE,
        }
    }

    fn small_integer(self) -> &'static str {
        match self {
            Flavor::Mysql => "TINYINT",
            Flavor::Postgresql | Flavor::Sqlite => "SMALLINT",
        }
    }

    fn base_integer(self) -> &'static str {
        match self {
            Flavor::Mysql => "INT",
            Flavor::Postgresql | Flavor::Sqlite => "INTEGER",
        }
    }
}

pub(super) fn is_integer(ty: &str) -> bool {
    matches!(
        ty,
        "int" | "integer" | "tinyint" | "smallint" | "mediumint" | "bigint"
    )
}

/// Resolves a generic type name plus declared length to the dialect's
/// native type text. Pure: same inputs, same output.
///
/// Unmapped type names pass through uppercased unchanged.
pub(super) fn native_type(flavor: Flavor, ty: &str, length: Option<&Length>) -> String {
    let lower = ty.to_lowercase();

    if is_integer(&lower) {
        let width = match length {
            Some(Length::Fixed(n)) => *n,
            Some(Length::Precision(p, _)) => *p,
            None => DEFAULT_INTEGER_WIDTH,
        };

        return if width == 1 {
            flavor.small_integer().into()
        } else if width > DEFAULT_INTEGER_WIDTH {
            "BIGINT".into()
        } else {
            lookup(flavor, &lower)
                .unwrap_or_else(|| flavor.base_integer())
                .into()
        };
    }

    let base = lookup(flavor, &lower)
        .map(str::to_owned)
        .unwrap_or_else(|| ty.to_uppercase());

    match length {
        Some(Length::Fixed(n)) => format!("{base}({n})"),
        Some(Length::Precision(p, s)) => format!("{base}({p}, {s})"),
        None if matches!(lower.as_str(), "varchar" | "char") => {
            format!("{base}({DEFAULT_CHAR_LENGTH})")
        }
        None => base,
    }
}

fn lookup(flavor: Flavor, lower: &str) -> Option<&'static str> {
    flavor
        .type_map()
        .iter()
        .find(|(generic, _)| *generic == lower)
        .map(|(_, native)| *native)
}
