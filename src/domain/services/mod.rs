//! Domain Services
//!
//! Traversal and detection logic. Services read the tree only through the
//! `FileSystem` port and never mutate it.

mod nested_vendor;
mod tree_walker;

pub use nested_vendor::{NestedVendorPruner, VENDOR_DIR_NAME};
pub use tree_walker::{TreeWalker, WalkReport};
