//! Clean options

use crate::domain::entities::LockManifest;
use crate::domain::policies::{Classifier, ClassifierSettings};
use crate::domain::value_objects::KeepPatterns;
use crate::error::{VendorCleanError, VendorCleanResult};

/// Options for a cleanup run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanOptions {
    /// Keep only Go source files
    pub only_go: bool,
    /// Remove Go test files
    pub no_tests: bool,
    /// Keep license and similar files even when `only_go` is set
    pub keep_legal_files: bool,
    /// Remove files outside the packages listed in the lock manifest
    pub use_lock_file: bool,
    /// Gitignore-style patterns for files that always survive
    pub keep: Vec<String>,
    /// Plan and report without deleting anything
    pub dry_run: bool,
}

impl CleanOptions {
    /// Create new clean options
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_only_go(mut self, only_go: bool) -> Self {
        self.only_go = only_go;
        self
    }

    pub fn with_no_tests(mut self, no_tests: bool) -> Self {
        self.no_tests = no_tests;
        self
    }

    pub fn with_keep_legal_files(mut self, keep_legal_files: bool) -> Self {
        self.keep_legal_files = keep_legal_files;
        self
    }

    pub fn with_use_lock_file(mut self, use_lock_file: bool) -> Self {
        self.use_lock_file = use_lock_file;
        self
    }

    pub fn with_keep<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keep = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Names of the active filtering flags, for display
    pub fn active_flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        if self.only_go {
            flags.push("only-go");
        }
        if self.no_tests {
            flags.push("no-tests");
        }
        if self.keep_legal_files {
            flags.push("keep-legal-files");
        }
        if self.use_lock_file {
            flags.push("use-lock-file");
        }
        if !self.keep.is_empty() {
            flags.push("keep");
        }
        flags
    }

    /// Build the classifier for these options
    pub fn classifier(&self, manifest: &LockManifest) -> VendorCleanResult<Classifier> {
        let keep = KeepPatterns::new(&self.keep).map_err(|e| VendorCleanError::KeepPattern {
            pattern: self.keep.join(", "),
            message: e.to_string(),
        })?;

        Ok(Classifier::new(ClassifierSettings {
            only_go: self.only_go,
            keep_legal_files: self.keep_legal_files,
            used_packages: self.use_lock_file.then(|| manifest.used_packages()),
            no_tests: self.no_tests,
            keep,
        }))
    }
}
