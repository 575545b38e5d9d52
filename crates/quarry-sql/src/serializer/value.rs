use super::{Formatter, Params, ToSql};

use quarry_core::stmt;

impl ToSql for &stmt::Value {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        let placeholder = f.params.push(self);
        fmt!(f, placeholder);
    }
}

/// A column's default value, rendered as an inline literal rather than a
/// placeholder. The generic type name is needed to resolve `now()`.
pub(super) struct DefaultLiteral<'a> {
    pub(super) value: &'a stmt::Value,
    pub(super) ty: &'a str,
}

impl ToSql for DefaultLiteral<'_> {
    fn to_sql<T: Params>(self, f: &mut Formatter<'_, T>) {
        use std::fmt::Write;

        match self.value {
            stmt::Value::Null => f.dst.push_str("NULL"),
            stmt::Value::Bool(value) => {
                f.dst.push_str(f.serializer.flavor.boolean_literal(*value));
            }
            stmt::Value::I64(value) => write!(f.dst, "{value}").unwrap(),
            stmt::Value::F64(value) => write!(f.dst, "{value}").unwrap(),
            stmt::Value::Json(value) => quote_string(f.dst, &value.to_string()),
            stmt::Value::String(value) => {
                if is_numeric(value) {
                    f.dst.push_str(value);
                } else if let Some(name) = value.strip_suffix("()") {
                    if name.eq_ignore_ascii_case("now") {
                        f.dst.push_str(current_time_fn(self.ty));
                    } else {
                        f.dst.push_str(&value.to_uppercase());
                    }
                } else {
                    quote_string(f.dst, value);
                }
            }
        }
    }
}

fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().is_ok()
}

/// `now()` resolves by the field's declared type.
fn current_time_fn(ty: &str) -> &'static str {
    match ty.to_lowercase().as_str() {
        "date" => "CURRENT_DATE",
        "time" => "CURRENT_TIME",
        _ => "CURRENT_TIMESTAMP",
    }
}

fn quote_string(dst: &mut String, value: &str) {
    dst.push('\'');
    for ch in value.chars() {
        if ch == '\'' {
            dst.push('\'');
        }
        dst.push(ch);
    }
    dst.push('\'');
}
