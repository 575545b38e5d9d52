use super::{Flavor, Formatter, ToSql};

use quarry_core::stmt;

/// Sink for positional parameters encountered during serialization.
pub trait Params {
    fn push(&mut self, param: &stmt::Value) -> Placeholder;
}

/// A 1-based positional placeholder.
pub struct Placeholder(pub usize);

impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        use std::fmt::Write;

        match f.serializer.flavor {
            Flavor::Mysql | Flavor::Sqlite => f.dst.push('?'),
            Flavor::Postgresql => write!(f.dst, "${}", self.0).unwrap(),
        }
    }
}
