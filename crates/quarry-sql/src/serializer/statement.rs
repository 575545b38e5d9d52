use super::{
    filter::WhereClause, Comma, Flavor, Formatter, Ident, Params, QualifiedIdent, ToSql,
};

use quarry_core::stmt;

struct ColumnsWithConstraints<'a>(&'a stmt::CreateTable);

impl ToSql for ColumnsWithConstraints<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let stmt = self.0;

        fmt!(f, Comma(&stmt.columns));

        if let Some(columns) = &stmt.primary_key {
            // SQLite only supports auto increment on the primary key column
            // itself, where the column definition already carries the PK.
            let pk_on_column = f.serializer.is_sqlite()
                && columns.len() == 1
                && stmt
                    .columns
                    .iter()
                    .any(|column| column.auto_increment && column.name == columns[0]);

            if !pk_on_column {
                fmt!(
                    f,
                    ", PRIMARY KEY (",
                    Comma(columns.iter().map(Ident)),
                    ")"
                );
            }
        }

        if f.serializer.is_mysql() {
            for key in &stmt.unique_keys {
                fmt!(
                    f,
                    ", UNIQUE KEY ",
                    Ident(&key.name),
                    " (",
                    Comma(key.columns.iter().map(Ident)),
                    ")"
                );
            }
            for key in &stmt.keys {
                fmt!(
                    f,
                    ", KEY ",
                    Ident(&key.name),
                    " (",
                    Comma(key.columns.iter().map(Ident)),
                    ")"
                );
            }
        }

        for foreign_key in &stmt.foreign_keys {
            fmt!(f, ", ", foreign_key);
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let columns = ColumnsWithConstraints(self);

        fmt!(
            f,
            "CREATE TABLE IF NOT EXISTS ",
            Ident(&self.name),
            " (",
            columns,
            ")"
        );
    }
}

impl ToSql for &stmt::ForeignKey {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(
            f,
            "CONSTRAINT ",
            Ident(&self.name),
            " FOREIGN KEY (",
            Comma(self.columns.iter().map(Ident)),
            ") REFERENCES ",
            Ident(&self.foreign_table),
            " (",
            Comma(self.foreign_columns.iter().map(Ident)),
            ")"
        );

        // Referential actions pass through verbatim
        if let Some(action) = &self.on_delete {
            fmt!(f, " ON DELETE ", action.as_str());
        }
        if let Some(action) = &self.on_update {
            fmt!(f, " ON UPDATE ", action.as_str());
        }
    }
}

/// A standalone index-creation statement, used by dialects that do not keep
/// keys inline in `CREATE TABLE` and by `ALTER` key additions.
pub(super) struct CreateIndex<'a> {
    pub(super) table: &'a str,
    pub(super) name: &'a str,
    pub(super) columns: &'a [String],
    pub(super) unique: bool,
}

impl ToSql for &CreateIndex<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let unique = if self.unique { "UNIQUE " } else { "" };

        fmt!(
            f,
            "CREATE ",
            unique,
            "INDEX ",
            Ident(self.name),
            " ON ",
            Ident(self.table),
            " (",
            Comma(self.columns.iter().map(Ident)),
            ")"
        );
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };

        fmt!(f, "DROP TABLE ", if_exists, Ident(&self.name));
    }
}

impl ToSql for &stmt::RenameTable {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(
            f,
            "ALTER TABLE ",
            Ident(&self.from),
            " RENAME TO ",
            Ident(&self.to)
        );
    }
}

impl ToSql for &stmt::Truncate {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match f.serializer.flavor {
            Flavor::Mysql => fmt!(f, "TRUNCATE TABLE ", Ident(&self.name)),
            Flavor::Postgresql => {
                fmt!(f, "TRUNCATE ", Ident(&self.name));
                if self.cascade {
                    fmt!(f, " CASCADE");
                }
            }
            // SQLite has no TRUNCATE statement
            Flavor::Sqlite => fmt!(f, "DELETE FROM ", Ident(&self.name)),
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        // Row presence and congruence are validated before serialization
        let first = &self.rows[0];

        fmt!(
            f,
            "INSERT INTO ",
            Ident(&self.table),
            " (",
            Comma(first.keys().map(Ident)),
            ") VALUES "
        );

        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                fmt!(f, ", ");
            }

            fmt!(f, "(");
            for (j, column) in first.keys().enumerate() {
                if j > 0 {
                    fmt!(f, ", ");
                }

                let Some(value) = row.get(column) else {
                    panic!("insert row congruence is validated before serialization");
                };
                fmt!(f, value);
            }
            fmt!(f, ")");
        }

        if let Some(returning) = &self.returning {
            if f.serializer.flavor.supports_returning() {
                fmt!(f, " RETURNING ", Comma(returning.iter().map(Ident)));
            }
            // MySQL has no RETURNING: the clause is omitted, not an error
        }
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, "UPDATE ", Ident(&self.table), " SET ");

        // Assignment placeholders come first, in set-map order; filter
        // values follow in filter order.
        for (i, (column, value)) in self.assignments.iter().enumerate() {
            if i > 0 {
                fmt!(f, ", ");
            }

            fmt!(f, Ident(column), " = ", value);
        }

        fmt!(f, WhereClause(&self.filters));
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(
            f,
            "DELETE FROM ",
            Ident(&self.table),
            WhereClause(&self.filters)
        );
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, "SELECT ");

        // Column entries may be comma-separated lists; flatten them. Entries
        // may be arbitrary expressions, so they pass through unquoted.
        let columns = flatten_columns(&self.columns);
        if columns.is_empty() {
            fmt!(f, "*");
        } else {
            for (i, column) in columns.iter().enumerate() {
                if i > 0 {
                    fmt!(f, ", ");
                }
                fmt!(f, column.as_str());
            }
        }

        fmt!(f, " FROM ", Ident(&self.table));

        if let Some(alias) = &self.alias {
            if alias != &self.table {
                fmt!(f, " AS ", Ident(alias));
            }
        }

        for join in &self.joins {
            fmt!(f, join);
        }

        fmt!(f, WhereClause(&self.filters));

        if !self.order_by.is_empty() {
            fmt!(f, " ORDER BY ", Comma(&self.order_by));
        }

        if let Some(limit) = self.limit {
            fmt!(f, " LIMIT ", limit);
        }
        if let Some(offset) = self.offset {
            fmt!(f, " OFFSET ", offset);
        }
    }
}

impl ToSql for &stmt::Join {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let kind = match self.kind {
            stmt::JoinKind::Inner => " INNER JOIN ",
            stmt::JoinKind::Left => " LEFT JOIN ",
            stmt::JoinKind::Right => " RIGHT JOIN ",
        };

        fmt!(f, kind, Ident(&self.table));

        if let Some(alias) = &self.alias {
            if alias != &self.table {
                fmt!(f, " AS ", Ident(alias));
            }
        }

        fmt!(
            f,
            " ON (",
            QualifiedIdent(&self.from_column),
            " = ",
            QualifiedIdent(&self.to_column),
            ")"
        );
    }
}

impl ToSql for &stmt::OrderBy {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, QualifiedIdent(&self.column), " ", &self.direction);
    }
}

impl ToSql for &stmt::Direction {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        match self {
            stmt::Direction::Asc => fmt!(f, "ASC"),
            stmt::Direction::Desc => fmt!(f, "DESC"),
        }
    }
}

fn flatten_columns(columns: &[String]) -> Vec<String> {
    columns
        .iter()
        .flat_map(|entry| entry.split(','))
        .map(|column| column.trim().to_string())
        .filter(|column| !column.is_empty())
        .collect()
}
