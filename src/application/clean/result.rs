//! Clean result types

use std::path::{Path, PathBuf};

use crate::domain::entities::{PlannedRemoval, RemovalKind, RemovalPlan};
use crate::domain::services::WalkReport;
use crate::error::RemovalFailure;

/// A computed plan for one vendor tree, not yet applied
#[derive(Debug, Clone)]
pub struct PlannedCleanup {
    /// Absolute or project-relative vendor directory
    pub vendor_root: PathBuf,
    /// Plan plus walk statistics
    pub walk: WalkReport,
}

impl PlannedCleanup {
    pub fn plan(&self) -> &RemovalPlan {
        &self.walk.plan
    }

    pub fn is_empty(&self) -> bool {
        self.walk.plan.is_empty()
    }
}

/// What the executor did with a plan
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// Entries removed (or that would be removed in a dry run)
    pub removed: Vec<PlannedRemoval>,
    /// Entries that could not be removed
    pub failures: Vec<RemovalFailure>,
}

/// Result of a cleanup run
#[derive(Debug, Clone)]
pub struct CleanReport {
    pub vendor_root: PathBuf,
    pub dry_run: bool,
    pub files_scanned: usize,
    pub files_kept: usize,
    /// Entries removed (or that would be removed in a dry run)
    pub removed: Vec<PlannedRemoval>,
    /// Entries that could not be removed
    pub failures: Vec<RemovalFailure>,
}

impl CleanReport {
    pub fn new(planned: &PlannedCleanup, outcome: ExecutionOutcome, dry_run: bool) -> Self {
        Self {
            vendor_root: planned.vendor_root.clone(),
            dry_run,
            files_scanned: planned.walk.files_scanned,
            files_kept: planned.walk.files_kept,
            removed: outcome.removed,
            failures: outcome.failures,
        }
    }

    pub fn vendor_root(&self) -> &Path {
        &self.vendor_root
    }

    /// Count removed entries of one kind
    pub fn removed_count(&self, kind: RemovalKind) -> usize {
        self.removed.iter().filter(|r| r.kind == kind).count()
    }

    /// Relative paths of removed entries
    pub fn removed_paths(&self) -> Vec<PathBuf> {
        self.removed
            .iter()
            .map(|r| r.path().to_path_buf())
            .collect()
    }

    /// Check if every planned entry was handled
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn is_noop(&self) -> bool {
        self.removed.is_empty() && self.failures.is_empty()
    }
}
