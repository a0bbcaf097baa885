//! JSON event types for `--json` output.

use serde::Serialize;

use vendorclean::{CleanReport, RemovalKind};

/// Emitted once the plan is known, before anything is removed.
#[derive(Debug, Clone, Serialize)]
pub struct CleanStartEvent<'a> {
    pub event: &'static str,
    pub version: &'static str,
    pub vendor: String,
    pub dry_run: bool,
    pub options: Vec<&'a str>,
    pub planned: usize,
}

impl<'a> CleanStartEvent<'a> {
    pub fn new(vendor: String, dry_run: bool, options: Vec<&'a str>, planned: usize) -> Self {
        Self {
            event: "clean_start",
            version: env!("CARGO_PKG_VERSION"),
            vendor,
            dry_run,
            options,
            planned,
        }
    }
}

/// One entry removed, or that would be removed in a dry run.
#[derive(Debug, Clone, Serialize)]
pub struct EntryRemovedEvent {
    pub event: &'static str,
    pub path: String,
    pub kind: &'static str,
}

impl EntryRemovedEvent {
    pub fn new(path: String, kind: RemovalKind) -> Self {
        Self {
            event: "entry_removed",
            path,
            kind: kind.as_str(),
        }
    }
}

/// One entry that could not be removed.
#[derive(Debug, Clone, Serialize)]
pub struct EntryFailedEvent {
    pub event: &'static str,
    pub path: String,
    pub error: String,
}

impl EntryFailedEvent {
    pub fn new(path: String, error: String) -> Self {
        Self {
            event: "entry_failed",
            path,
            error,
        }
    }
}

/// Final counts.
#[derive(Debug, Clone, Serialize)]
pub struct CleanCompleteEvent {
    pub event: &'static str,
    pub success: bool,
    pub dry_run: bool,
    pub files_scanned: usize,
    pub files_kept: usize,
    pub files_removed: usize,
    pub dirs_removed: usize,
    pub nested_vendor_removed: usize,
    pub failures: usize,
}

impl CleanCompleteEvent {
    pub fn from_report(report: &CleanReport) -> Self {
        Self {
            event: "clean_complete",
            success: report.is_success(),
            dry_run: report.dry_run,
            files_scanned: report.files_scanned,
            files_kept: report.files_kept,
            files_removed: report.removed_count(RemovalKind::File),
            dirs_removed: report.removed_count(RemovalKind::EmptyDir),
            nested_vendor_removed: report.removed_count(RemovalKind::NestedVendor),
            failures: report.failures.len(),
        }
    }
}

/// Emitted when the run fails before or instead of completing.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub code: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            code,
            message: message.into(),
        }
    }
}
