use super::{
    statement::CreateIndex, ty, value::DefaultLiteral, Comma, Flavor, Formatter, Ident, Params,
    ToSql,
};

use quarry_core::stmt;

/// One discrete structural change carved out of an `ALTER TABLE`.
///
/// The expansion order is fixed: removals always precede additions of the
/// same kind, and fields change before keys, keys before foreign keys.
pub(super) enum AlterOp<'a> {
    DropColumn(&'a str),
    AddColumn(&'a stmt::ColumnDef),
    ChangeColumn(&'a stmt::ColumnDef),
    DropPrimaryKey,
    AddPrimaryKey(&'a [String]),
    DropUniqueKey(&'a str),
    AddUniqueKey(&'a stmt::Key),
    DropKey(&'a str),
    AddKey(&'a stmt::Key),
    DropForeignKey(&'a str),
    AddForeignKey(&'a stmt::ForeignKey),
}

/// Expands an `ALTER TABLE` into its discrete changes, one emitted
/// statement each: drop fields, add fields, change fields, drop PK, add PK,
/// drop uniques, add uniques, drop indexes, add indexes, drop FKs, add FKs.
pub(super) fn expand(stmt: &stmt::AlterTable) -> Vec<AlterOp<'_>> {
    let mut ops = Vec::new();

    for name in &stmt.drop_columns {
        ops.push(AlterOp::DropColumn(name));
    }
    for column in &stmt.add_columns {
        ops.push(AlterOp::AddColumn(column));
    }
    for column in &stmt.change_columns {
        ops.push(AlterOp::ChangeColumn(column));
    }
    if stmt.drop_primary_key {
        ops.push(AlterOp::DropPrimaryKey);
    }
    if let Some(columns) = &stmt.add_primary_key {
        ops.push(AlterOp::AddPrimaryKey(columns));
    }
    for name in &stmt.drop_unique_keys {
        ops.push(AlterOp::DropUniqueKey(name));
    }
    for key in &stmt.add_unique_keys {
        ops.push(AlterOp::AddUniqueKey(key));
    }
    for name in &stmt.drop_keys {
        ops.push(AlterOp::DropKey(name));
    }
    for key in &stmt.add_keys {
        ops.push(AlterOp::AddKey(key));
    }
    for name in &stmt.drop_foreign_keys {
        ops.push(AlterOp::DropForeignKey(name));
    }
    for foreign_key in &stmt.add_foreign_keys {
        ops.push(AlterOp::AddForeignKey(foreign_key));
    }

    ops
}

impl AlterOp<'_> {
    /// SQLite cannot change column shapes or mutate primary/foreign keys
    /// through `ALTER TABLE`; callers fall back to an explicit
    /// recreate-copy-drop-rename for those.
    pub(super) fn supported(&self, flavor: Flavor) -> bool {
        if flavor != Flavor::Sqlite {
            return true;
        }

        !matches!(
            self,
            AlterOp::ChangeColumn(_)
                | AlterOp::DropPrimaryKey
                | AlterOp::AddPrimaryKey(_)
                | AlterOp::DropForeignKey(_)
                | AlterOp::AddForeignKey(_)
        )
    }

    pub(super) fn describe(&self) -> &'static str {
        match self {
            AlterOp::DropColumn(_) => "drop a column",
            AlterOp::AddColumn(_) => "add a column",
            AlterOp::ChangeColumn(_) => "change a column",
            AlterOp::DropPrimaryKey => "drop a primary key",
            AlterOp::AddPrimaryKey(_) => "add a primary key",
            AlterOp::DropUniqueKey(_) => "drop a unique key",
            AlterOp::AddUniqueKey(_) => "add a unique key",
            AlterOp::DropKey(_) => "drop an index",
            AlterOp::AddKey(_) => "add an index",
            AlterOp::DropForeignKey(_) => "drop a foreign key",
            AlterOp::AddForeignKey(_) => "add a foreign key",
        }
    }
}

/// One `AlterOp` rendered against its table.
pub(super) struct AlterStatement<'a> {
    pub(super) table: &'a str,
    pub(super) op: &'a AlterOp<'a>,
}

impl ToSql for &AlterStatement<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let flavor = f.serializer.flavor;
        let table = Ident(self.table);

        match self.op {
            AlterOp::DropColumn(name) => {
                fmt!(f, "ALTER TABLE ", table, " DROP COLUMN ", Ident(*name));
            }
            AlterOp::AddColumn(column) => {
                fmt!(f, "ALTER TABLE ", table, " ADD COLUMN ", *column);
            }
            AlterOp::ChangeColumn(column) => match flavor {
                Flavor::Mysql => {
                    fmt!(
                        f,
                        "ALTER TABLE ",
                        table,
                        " CHANGE COLUMN ",
                        Ident(&column.name),
                        " ",
                        *column
                    );
                }
                Flavor::Postgresql => {
                    // PostgreSQL takes one subcommand per column property;
                    // they combine into a single ALTER TABLE statement.
                    let native = ty::native_type(flavor, &column.ty, column.length.as_ref());

                    fmt!(
                        f,
                        "ALTER TABLE ",
                        table,
                        " ALTER COLUMN ",
                        Ident(&column.name),
                        " TYPE ",
                        native.as_str()
                    );

                    if column.nullable {
                        fmt!(f, ", ALTER COLUMN ", Ident(&column.name), " DROP NOT NULL");
                    } else {
                        fmt!(f, ", ALTER COLUMN ", Ident(&column.name), " SET NOT NULL");
                    }

                    if let Some(default) = &column.default {
                        fmt!(
                            f,
                            ", ALTER COLUMN ",
                            Ident(&column.name),
                            " SET DEFAULT ",
                            DefaultLiteral {
                                value: default,
                                ty: &column.ty,
                            }
                        );
                    }
                }
                Flavor::Sqlite => {
                    panic!("unsupported alter operations are rejected before serialization")
                }
            },
            AlterOp::DropPrimaryKey => match flavor {
                Flavor::Mysql => fmt!(f, "ALTER TABLE ", table, " DROP PRIMARY KEY"),
                Flavor::Postgresql => {
                    let pkey = format!("{}_pkey", self.table);
                    fmt!(
                        f,
                        "ALTER TABLE ",
                        table,
                        " DROP CONSTRAINT ",
                        Ident(pkey.as_str())
                    );
                }
                Flavor::Sqlite => {
                    panic!("unsupported alter operations are rejected before serialization")
                }
            },
            AlterOp::AddPrimaryKey(columns) => {
                fmt!(
                    f,
                    "ALTER TABLE ",
                    table,
                    " ADD PRIMARY KEY (",
                    Comma(columns.iter().map(Ident)),
                    ")"
                );
            }
            AlterOp::DropUniqueKey(name) | AlterOp::DropKey(name) => match flavor {
                Flavor::Mysql => {
                    fmt!(f, "ALTER TABLE ", table, " DROP INDEX ", Ident(*name));
                }
                Flavor::Postgresql | Flavor::Sqlite => {
                    fmt!(f, "DROP INDEX ", Ident(*name));
                }
            },
            AlterOp::AddUniqueKey(key) => match flavor {
                Flavor::Mysql => {
                    fmt!(
                        f,
                        "ALTER TABLE ",
                        table,
                        " ADD UNIQUE KEY ",
                        Ident(&key.name),
                        " (",
                        Comma(key.columns.iter().map(Ident)),
                        ")"
                    );
                }
                Flavor::Postgresql | Flavor::Sqlite => {
                    fmt!(
                        f,
                        &CreateIndex {
                            table: self.table,
                            name: &key.name,
                            columns: &key.columns,
                            unique: true,
                        }
                    );
                }
            },
            AlterOp::AddKey(key) => match flavor {
                Flavor::Mysql => {
                    fmt!(
                        f,
                        "ALTER TABLE ",
                        table,
                        " ADD INDEX ",
                        Ident(&key.name),
                        " (",
                        Comma(key.columns.iter().map(Ident)),
                        ")"
                    );
                }
                Flavor::Postgresql | Flavor::Sqlite => {
                    fmt!(
                        f,
                        &CreateIndex {
                            table: self.table,
                            name: &key.name,
                            columns: &key.columns,
                            unique: false,
                        }
                    );
                }
            },
            AlterOp::DropForeignKey(name) => match flavor {
                Flavor::Mysql => {
                    fmt!(f, "ALTER TABLE ", table, " DROP FOREIGN KEY ", Ident(*name));
                }
                Flavor::Postgresql => {
                    fmt!(f, "ALTER TABLE ", table, " DROP CONSTRAINT ", Ident(*name));
                }
                Flavor::Sqlite => {
                    panic!("unsupported alter operations are rejected before serialization")
                }
            },
            AlterOp::AddForeignKey(foreign_key) => {
                fmt!(f, "ALTER TABLE ", table, " ADD ", *foreign_key);
            }
        }
    }
}
