pub mod builder;

pub mod driver;
pub use driver::{Connection, QueryObject};

mod error;
pub use error::Error;

pub mod stmt;
pub use stmt::Statement;

/// A Result type alias that uses Quarry's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
