pub mod engine;
pub use engine::Engine;

pub mod serializer;
pub use serializer::{Flavor, Params, Placeholder, Serializer};
