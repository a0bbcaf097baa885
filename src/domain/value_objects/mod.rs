//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod keep_patterns;
mod path;

pub use keep_patterns::{KeepPatternError, KeepPatterns};
pub use path::{PathError, SafePath};
