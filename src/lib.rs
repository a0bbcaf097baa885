//! vendorclean - prune vendored Go dependency trees
//!
//! After a package manager has populated `<root>/vendor`, vendorclean removes
//! what the build does not need: non-Go files, test files, packages the lock
//! manifest does not use, and nested vendor trees inside dependencies.
//!
//! The whole tree is planned before anything is deleted, and deletions never
//! leave the vendor root.

use std::path::Path;

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::clean::{CleanOptions, CleanReport, CleanUseCase};
pub use config::{ColorMode, Config};
pub use domain::entities::{ImportEntry, LockManifest, RemovalKind, RemovalPlan, TreeEntry};
pub use domain::policies::{Classifier, Decision};
pub use domain::services::VENDOR_DIR_NAME;
pub use error::{RemovalFailure, VendorCleanError, VendorCleanResult};
pub use infrastructure::{GlideLockRepository, LocalFs};

/// Clean `<root>/vendor` using `<root>/glide.lock`.
///
/// Returns the report on full success. If any planned entry could not be
/// removed, everything else is still attempted and the result is
/// `PartialCleanup` carrying every failure. Precondition and traversal
/// errors abort before the tree is touched.
pub fn cleanup(root: &Path, options: &CleanOptions) -> VendorCleanResult<CleanReport> {
    let use_case = CleanUseCase::new(GlideLockRepository::new(), LocalFs::new());
    let report = use_case.execute(root, options)?;

    if report.is_success() {
        Ok(report)
    } else {
        Err(VendorCleanError::PartialCleanup {
            removed: report.removed_paths(),
            failures: report.failures,
        })
    }
}
