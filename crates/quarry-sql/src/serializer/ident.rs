use super::{Formatter, Params, ToSql};

/// An identifier, wrapped in the dialect's quote character. Embedded quote
/// characters are escaped by doubling.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let quote = f.serializer.flavor.quote();

        f.dst.push(quote);
        for ch in self.0.as_ref().chars() {
            f.dst.push(ch);
            if ch == quote {
                f.dst.push(quote);
            }
        }
        f.dst.push(quote);
    }
}

/// A possibly qualified name (`u.id`); each dotted part is quoted
/// separately.
pub(super) struct QualifiedIdent<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for QualifiedIdent<S> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let mut s = "";
        for part in self.0.as_ref().split('.') {
            fmt!(f, s, Ident(part));
            s = ".";
        }
    }
}
