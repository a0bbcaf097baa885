//! LockManifestRepository port - abstraction for reading the lock manifest
//!
//! The domain only sees a parsed `LockManifest`; the on-disk format is an
//! infrastructure concern.

use std::path::Path;

use crate::domain::entities::LockManifest;
use crate::error::VendorCleanResult;

/// Abstract source of the parsed lock manifest
pub trait LockManifestRepository {
    /// File name of the manifest inside the project root, e.g. `glide.lock`
    fn file_name(&self) -> &'static str;

    /// Load and parse the manifest at `path`.
    ///
    /// Missing files yield `ManifestNotFound`, malformed ones `ManifestParse`.
    fn load(&self, path: &Path) -> VendorCleanResult<LockManifest>;

    /// Load the manifest from its usual place inside `project_root`
    fn load_from_root(&self, project_root: &Path) -> VendorCleanResult<LockManifest> {
        self.load(&project_root.join(self.file_name()))
    }
}
