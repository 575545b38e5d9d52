use super::{Delimited, Formatter, Params, ToSql};

use quarry_core::stmt;

impl ToSql for &stmt::Filter {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let mut values = self.values.iter();

        for ch in self.condition.chars() {
            if ch == '?' {
                let Some(value) = values.next() else {
                    panic!("filter placeholder parity is validated before serialization");
                };

                let placeholder = f.params.push(value);
                fmt!(f, placeholder);
            } else {
                f.dst.push(ch);
            }
        }
    }
}

/// The `WHERE` clause formed by AND-joining a statement's filters. Value
/// lists concatenate in filter order, matching placeholder emission order.
pub(super) struct WhereClause<'a>(pub(super) &'a [stmt::Filter]);

impl ToSql for WhereClause<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        if self.0.is_empty() {
            return;
        }

        fmt!(f, " WHERE ", Delimited(self.0, " AND "));
    }
}
