//! Nested vendor detection
//!
//! A `vendor` directory inside an already vendored package is a second
//! level of flattening. Once the outer tool has flattened dependencies it is
//! redundant and shadows packages at build time, so it goes away wholesale.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::domain::entities::LockManifest;

/// Directory name used for vendor trees
pub const VENDOR_DIR_NAME: &str = "vendor";

/// Detects nested vendor trees below the vendor root
#[derive(Debug, Clone, Default)]
pub struct NestedVendorPruner {
    import_roots: Vec<PathBuf>,
}

impl NestedVendorPruner {
    pub fn new(import_roots: Vec<PathBuf>) -> Self {
        Self { import_roots }
    }

    pub fn from_manifest(manifest: &LockManifest) -> Self {
        Self::new(manifest.import_roots())
    }

    /// Whether the directory at `rel_path` (relative to the vendor root) is a
    /// nested vendor tree.
    ///
    /// A `vendor` directory qualifies when it sits strictly inside an imported
    /// package, or when no imported package path runs through it. A `vendor`
    /// segment that is part of an import path itself is left alone.
    pub fn is_nested_vendor(&self, rel_path: &Path) -> bool {
        if rel_path.file_name() != Some(OsStr::new(VENDOR_DIR_NAME)) {
            return false;
        }

        let inside_import = self
            .import_roots
            .iter()
            .any(|root| rel_path.starts_with(root) && rel_path != root.as_path());
        if inside_import {
            return true;
        }

        !self
            .import_roots
            .iter()
            .any(|root| root.starts_with(rel_path))
    }
}
