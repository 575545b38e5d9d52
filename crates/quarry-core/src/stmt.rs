mod alter_table;
pub use alter_table::AlterTable;

mod column_def;
pub use column_def::{ColumnDef, Length};

mod create_table;
pub use create_table::CreateTable;

mod delete;
pub use delete::Delete;

mod drop_table;
pub use drop_table::DropTable;

mod filter;
pub use filter::Filter;

mod insert;
pub use insert::Insert;

mod join;
pub use join::{Join, JoinKind};

mod key;
pub use key::{ForeignKey, Key};

mod order_by;
pub use order_by::{Direction, OrderBy};

mod rename_table;
pub use rename_table::RenameTable;

mod select;
pub use select::Select;

mod truncate;
pub use truncate::Truncate;

mod update;
pub use update::Update;

mod value;
pub use value::Value;

/// A dialect-independent description of one SQL statement.
///
/// This is the stable contract between the builders and the dialect
/// compilers: a compiler may only depend on this shape, never on builder
/// internals. Values are immutable once captured by `build()`.
#[derive(Debug, Clone)]
pub enum Statement {
    Create(CreateTable),
    Alter(AlterTable),
    Drop(DropTable),
    Rename(RenameTable),
    Truncate(Truncate),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
    Select(Select),
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::Create(value)
    }
}

impl From<AlterTable> for Statement {
    fn from(value: AlterTable) -> Self {
        Self::Alter(value)
    }
}

impl From<DropTable> for Statement {
    fn from(value: DropTable) -> Self {
        Self::Drop(value)
    }
}

impl From<RenameTable> for Statement {
    fn from(value: RenameTable) -> Self {
        Self::Rename(value)
    }
}

impl From<Truncate> for Statement {
    fn from(value: Truncate) -> Self {
        Self::Truncate(value)
    }
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Self::Insert(value)
    }
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Self::Update(value)
    }
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Self::Delete(value)
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
