//! Tree walker
//!
//! Depth-first traversal of the vendor root producing a `RemovalPlan`.
//! The walker only reads; nothing is removed until the executor runs, so a
//! read failure anywhere aborts before any mutation.

use std::path::{Path, PathBuf};

use crate::domain::entities::{PlannedRemoval, RemovalKind, RemovalPlan, TreeEntry};
use crate::domain::policies::{Classifier, Decision};
use crate::domain::ports::FileSystem;
use crate::error::{VendorCleanError, VendorCleanResult};

use super::nested_vendor::NestedVendorPruner;

/// Plan plus what the walk saw on the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkReport {
    pub plan: RemovalPlan,
    pub files_scanned: usize,
    pub dirs_scanned: usize,
    pub files_kept: usize,
}

/// Walks a vendor tree and decides what goes
pub struct TreeWalker<'a, FS: FileSystem> {
    fs: FS,
    classifier: &'a Classifier,
    pruner: &'a NestedVendorPruner,
}

impl<'a, FS: FileSystem> TreeWalker<'a, FS> {
    pub fn new(fs: FS, classifier: &'a Classifier, pruner: &'a NestedVendorPruner) -> Self {
        Self {
            fs,
            classifier,
            pruner,
        }
    }

    /// Walk `vendor_root` and build the removal plan.
    ///
    /// The root itself is never planned for removal, even if nothing
    /// survives below it.
    pub fn walk(&self, vendor_root: &Path) -> VendorCleanResult<WalkReport> {
        let mut report = WalkReport::default();
        let mut removals = Vec::new();

        self.walk_dir(vendor_root, Path::new(""), &mut removals, &mut report)?;

        report.plan = RemovalPlan::from_removals(removals);
        log::info!(
            "planned {} removals ({} files scanned, {} kept)",
            report.plan.len(),
            report.files_scanned,
            report.files_kept
        );
        Ok(report)
    }

    /// Returns whether anything below `rel_dir` survives.
    fn walk_dir(
        &self,
        vendor_root: &Path,
        rel_dir: &Path,
        removals: &mut Vec<PlannedRemoval>,
        report: &mut WalkReport,
    ) -> VendorCleanResult<bool> {
        let abs_dir = vendor_root.join(rel_dir);
        let children = self
            .fs
            .read_dir(&abs_dir)
            .map_err(|source| VendorCleanError::Traversal {
                path: abs_dir.clone(),
                source,
            })?;

        let mut survivors = false;
        for child in children {
            let rel_path: PathBuf = rel_dir.join(&child.name);

            if child.is_dir() {
                report.dirs_scanned += 1;

                if self.pruner.is_nested_vendor(&rel_path) {
                    log::debug!("nested vendor tree: {}", rel_path.display());
                    removals.push(PlannedRemoval::new(
                        TreeEntry::dir(rel_path),
                        RemovalKind::NestedVendor,
                    ));
                    continue;
                }

                if self.walk_dir(vendor_root, &rel_path, removals, report)? {
                    survivors = true;
                } else {
                    log::debug!("empty after cleanup: {}", rel_path.display());
                    removals.push(PlannedRemoval::new(
                        TreeEntry::dir(rel_path),
                        RemovalKind::EmptyDir,
                    ));
                }
                continue;
            }

            report.files_scanned += 1;
            match self.classifier.classify(&rel_path, false) {
                Decision::Keep => {
                    report.files_kept += 1;
                    survivors = true;
                }
                Decision::Remove => {
                    log::debug!(
                        "remove {} ({})",
                        rel_path.display(),
                        self.classifier
                            .deciding_rule(&rel_path, false)
                            .unwrap_or("rule")
                    );
                    removals.push(PlannedRemoval::new(
                        TreeEntry::file(rel_path),
                        RemovalKind::File,
                    ));
                }
            }
        }

        Ok(survivors)
    }
}
