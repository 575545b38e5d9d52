use super::{ty, value::DefaultLiteral, Flavor, Formatter, Ident, Params, ToSql};

use quarry_core::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        fmt!(f, Ident(&self.name), " ");

        let flavor = f.serializer.flavor;

        if self.auto_increment {
            match flavor {
                Flavor::Mysql => {
                    let native = ty::native_type(flavor, &self.ty, self.length.as_ref());
                    fmt!(f, native.as_str());
                    if self.unsigned {
                        fmt!(f, " UNSIGNED");
                    }
                    if !self.nullable {
                        fmt!(f, " NOT NULL");
                    }
                    fmt!(f, " AUTO_INCREMENT");
                }
                Flavor::Postgresql => {
                    let native = ty::native_type(flavor, &self.ty, self.length.as_ref());
                    let serial = if native == "BIGINT" {
                        "BIGSERIAL"
                    } else {
                        "SERIAL"
                    };
                    fmt!(f, serial);
                }
                Flavor::Sqlite => {
                    // The PK rides on the column; the table-level PRIMARY KEY
                    // clause is suppressed for this case.
                    fmt!(f, "INTEGER PRIMARY KEY AUTOINCREMENT");
                }
            }
            return;
        }

        let native = ty::native_type(flavor, &self.ty, self.length.as_ref());
        fmt!(f, native.as_str());

        // Only MySQL understands unsigned integer types
        if self.unsigned && f.serializer.is_mysql() {
            fmt!(f, " UNSIGNED");
        }

        if !self.nullable {
            fmt!(f, " NOT NULL");
        }

        if let Some(default) = &self.default {
            fmt!(
                f,
                " DEFAULT ",
                DefaultLiteral {
                    value: default,
                    ty: &self.ty,
                }
            );
        }

        if let Some(attribute) = &self.attribute {
            fmt!(f, " ", attribute.as_str());
        }
    }
}
