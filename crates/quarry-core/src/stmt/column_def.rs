use super::Value;

/// Declared length of a column type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Length {
    /// A plain length, e.g. `VARCHAR(255)`.
    Fixed(u32),

    /// Precision and scale, rendered verbatim as `TYPE(p, s)`. Used for
    /// `DECIMAL` and friends.
    Precision(u32, u32),
}

/// One column's declared shape.
///
/// The `ty` field holds a generic, dialect-independent type name. Each
/// dialect maps it through its own type table at compile time; names the
/// table does not know pass through uppercased.
#[derive(Debug, Clone)]
pub struct ColumnDef {
    pub name: String,
    pub ty: String,
    pub length: Option<Length>,
    pub nullable: bool,
    pub default: Option<Value>,
    pub auto_increment: bool,
    pub unsigned: bool,

    /// Free-form trailing attribute, passed through verbatim
    /// (e.g. `ON UPDATE CURRENT_TIMESTAMP`).
    pub attribute: Option<String>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> ColumnDef {
        ColumnDef {
            name: name.into(),
            ty: ty.into(),
            length: None,
            nullable: true,
            default: None,
            auto_increment: false,
            unsigned: false,
            attribute: None,
        }
    }

    pub fn length(mut self, length: u32) -> Self {
        self.length = Some(Length::Fixed(length));
        self
    }

    pub fn precision(mut self, precision: u32, scale: u32) -> Self {
        self.length = Some(Length::Precision(precision, scale));
        self
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn auto_increment(mut self) -> Self {
        self.auto_increment = true;
        self
    }

    pub fn unsigned(mut self) -> Self {
        self.unsigned = true;
        self
    }

    pub fn attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }
}
