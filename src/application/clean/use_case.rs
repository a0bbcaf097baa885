//! Clean Use Case
//!
//! Orchestrates a cleanup: precondition checks, manifest load, planning walk,
//! then execution of the plan.

use std::path::{Path, PathBuf};

use crate::domain::ports::{EntryKind, FileSystem, LockManifestRepository};
use crate::domain::services::{NestedVendorPruner, TreeWalker, VENDOR_DIR_NAME};
use crate::error::{VendorCleanError, VendorCleanResult};

use super::executor::Executor;
use super::options::CleanOptions;
use super::result::{CleanReport, PlannedCleanup};

/// Clean use case - prunes a vendor tree below a project root
pub struct CleanUseCase<LR, FS>
where
    LR: LockManifestRepository,
    FS: FileSystem,
{
    manifest_repo: LR,
    fs: FS,
}

impl<LR, FS> CleanUseCase<LR, FS>
where
    LR: LockManifestRepository,
    FS: FileSystem,
{
    /// Create a new clean use case
    pub fn new(manifest_repo: LR, fs: FS) -> Self {
        Self { manifest_repo, fs }
    }

    /// Vendor directory for a project root
    pub fn vendor_root(project_root: &Path) -> PathBuf {
        project_root.join(VENDOR_DIR_NAME)
    }

    /// Check preconditions and compute the removal plan without touching
    /// the tree.
    ///
    /// Fails if the vendor directory is missing or not a directory, if the
    /// manifest is missing or unparseable, or if any read fails mid-walk.
    pub fn plan(
        &self,
        project_root: &Path,
        options: &CleanOptions,
    ) -> VendorCleanResult<PlannedCleanup> {
        let vendor_root = Self::vendor_root(project_root);

        match self.fs.entry_kind(&vendor_root) {
            Ok(Some(EntryKind::Dir)) => {}
            Ok(Some(EntryKind::File)) => {
                return Err(VendorCleanError::NotADirectory { path: vendor_root })
            }
            Ok(None) => return Err(VendorCleanError::VendorDirNotFound { path: vendor_root }),
            Err(source) => {
                return Err(VendorCleanError::Traversal {
                    path: vendor_root,
                    source,
                })
            }
        }

        let manifest = self.manifest_repo.load_from_root(project_root)?;
        let classifier = options.classifier(&manifest)?;
        let pruner = NestedVendorPruner::from_manifest(&manifest);

        log::info!(
            "cleaning {} ({} imports, rules: {})",
            vendor_root.display(),
            manifest.all_imports().count(),
            if classifier.rules().is_empty() {
                "none".to_string()
            } else {
                classifier
                    .rules()
                    .iter()
                    .map(|r| r.name())
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        );

        let walk = TreeWalker::new(&self.fs, &classifier, &pruner).walk(&vendor_root)?;
        Ok(PlannedCleanup { vendor_root, walk })
    }

    /// Apply a previously computed plan
    pub fn apply(&self, planned: &PlannedCleanup, dry_run: bool) -> CleanReport {
        let outcome = Executor::new(&self.fs).execute(&planned.vendor_root, planned.plan(), dry_run);
        if !outcome.failures.is_empty() {
            log::warn!(
                "{} of {} planned entries could not be removed",
                outcome.failures.len(),
                planned.plan().len()
            );
        }
        CleanReport::new(planned, outcome, dry_run)
    }

    /// Plan and apply in one go
    pub fn execute(
        &self,
        project_root: &Path,
        options: &CleanOptions,
    ) -> VendorCleanResult<CleanReport> {
        let planned = self.plan(project_root, options)?;
        Ok(self.apply(&planned, options.dry_run))
    }
}
