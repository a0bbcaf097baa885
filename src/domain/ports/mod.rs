//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod lock_manifest_repository;

pub use file_system::{DirEntryInfo, EntryKind, FileSystem};
pub use lock_manifest_repository::LockManifestRepository;
