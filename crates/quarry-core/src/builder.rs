//! Fluent statement builders.
//!
//! A builder accumulates one statement's intent through chained mutator
//! calls and emits a dialect-independent snapshot via [`build`]. The
//! snapshot is a deep copy: mutating the builder afterwards does not affect
//! a previously taken snapshot, and the same builder may be rendered
//! against several dialects without re-running application code.
//!
//! [`build`]: Create::build

mod alter;
pub use alter::Alter;

mod create;
pub use create::Create;

mod delete;
pub use delete::Delete;

mod insert;
pub use insert::Insert;

mod select;
pub use select::Select;

mod update;
pub use update::Update;

use crate::{Error, Result};

use std::collections::HashSet;

/// Key names must be unique within one statement's key set.
fn check_key_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();

    for name in names {
        if !seen.insert(name) {
            return Err(Error::invalid_statement(format!(
                "duplicate key name `{name}`"
            )));
        }
    }

    Ok(())
}
