//! Domain Entities
//!
//! Core data of a cleanup run: the parsed lock manifest and the removal plan.

mod lock_manifest;
mod removal_plan;

pub use lock_manifest::{is_valid_import_path, ImportEntry, LockManifest};
pub use removal_plan::{PlannedRemoval, RemovalKind, RemovalPlan, TreeEntry};
