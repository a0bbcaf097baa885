//! Plan executor
//!
//! Applies a `RemovalPlan` in its deepest-first order. Removals are
//! independent: a failure is recorded and the rest of the plan still runs.

use std::path::Path;

use crate::domain::entities::{RemovalKind, RemovalPlan};
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::SafePath;
use crate::error::RemovalFailure;

use super::result::ExecutionOutcome;

/// Best-effort plan executor
pub struct Executor<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> Executor<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Apply `plan` below `vendor_root`. With `dry_run` nothing is touched
    /// and every entry is reported as removed.
    pub fn execute(&self, vendor_root: &Path, plan: &RemovalPlan, dry_run: bool) -> ExecutionOutcome {
        let mut outcome = ExecutionOutcome::default();

        for planned in plan.iter() {
            let safe = match SafePath::new(planned.path()) {
                Ok(safe) => safe,
                Err(e) => {
                    log::warn!("refusing to remove {}: {}", planned.path().display(), e);
                    outcome
                        .failures
                        .push(RemovalFailure::new(planned.path(), e.to_string()));
                    continue;
                }
            };

            if dry_run {
                outcome.removed.push(planned.clone());
                continue;
            }

            let target = safe.resolve(vendor_root);
            let result = match planned.kind {
                RemovalKind::File => self.fs.remove_file(&target),
                RemovalKind::EmptyDir => self.fs.remove_empty_dir(&target),
                RemovalKind::NestedVendor => self.fs.remove_dir_all(&target),
            };

            match result {
                Ok(()) => {
                    log::debug!("removed {} ({})", safe, planned.kind);
                    outcome.removed.push(planned.clone());
                }
                Err(e) => {
                    log::warn!("failed to remove {}: {}", safe, e);
                    outcome
                        .failures
                        .push(RemovalFailure::new(safe.into_path_buf(), e.to_string()));
                }
            }
        }

        outcome
    }
}
