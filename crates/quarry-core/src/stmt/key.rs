/// A named unique key or plain index.
///
/// Key names must be unique within one statement's key set; the builder
/// checks this when the statement is built.
#[derive(Debug, Clone)]
pub struct Key {
    pub name: String,
    pub columns: Vec<String>,
}

impl Key {
    pub fn new<I, S>(name: impl Into<String>, columns: I) -> Key
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Key {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }
}

/// A foreign key constraint.
///
/// Referential actions are passed through to the dialect verbatim, without
/// validation.
#[derive(Debug, Clone)]
pub struct ForeignKey {
    pub name: String,
    pub columns: Vec<String>,
    pub foreign_table: String,
    pub foreign_columns: Vec<String>,
    pub on_delete: Option<String>,
    pub on_update: Option<String>,
}

impl ForeignKey {
    pub fn new<I, J, S, T>(
        name: impl Into<String>,
        columns: I,
        foreign_table: impl Into<String>,
        foreign_columns: J,
    ) -> ForeignKey
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        ForeignKey {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            foreign_table: foreign_table.into(),
            foreign_columns: foreign_columns.into_iter().map(Into::into).collect(),
            on_delete: None,
            on_update: None,
        }
    }

    pub fn on_delete(mut self, action: impl Into<String>) -> Self {
        self.on_delete = Some(action.into());
        self
    }

    pub fn on_update(mut self, action: impl Into<String>) -> Self {
        self.on_update = Some(action.into());
        self
    }
}
