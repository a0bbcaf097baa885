//! Lock manifest entity - the dependency list recorded by the package manager
//!
//! Pure data. Parsing from disk is handled by `LockManifestRepository`.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

/// One top-level dependency declared in the lock manifest
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportEntry {
    name: String,
    version: Option<String>,
    subpackages: Vec<String>,
}

impl ImportEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            subpackages: Vec::new(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_subpackages<I, S>(mut self, subpackages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subpackages = subpackages.into_iter().map(Into::into).collect();
        self
    }

    /// Import path, e.g. `github.com/org/repo`
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn subpackages(&self) -> &[String] {
        &self.subpackages
    }

    /// Package root relative to the vendor directory
    pub fn root(&self) -> PathBuf {
        PathBuf::from(self.name.trim_matches('/'))
    }

    /// Every package directory this import contributes to the build:
    /// the root plus one directory per declared subpackage.
    pub fn package_dirs(&self) -> Vec<PathBuf> {
        let root = self.root();
        let mut dirs = vec![root.clone()];
        for sub in &self.subpackages {
            let sub = sub.trim_matches('/');
            if sub.is_empty() || sub == "." {
                continue;
            }
            dirs.push(root.join(sub));
        }
        dirs
    }
}

/// Returns true when `name` is a usable relative import path.
pub fn is_valid_import_path(name: &str) -> bool {
    let trimmed = name.trim_matches('/');
    if trimmed.is_empty() {
        return false;
    }
    Path::new(trimmed)
        .components()
        .all(|c| matches!(c, Component::Normal(_)))
}

/// Parsed lock manifest
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LockManifest {
    hash: Option<String>,
    imports: Vec<ImportEntry>,
    dev_imports: Vec<ImportEntry>,
}

impl LockManifest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    pub fn with_imports(mut self, imports: Vec<ImportEntry>) -> Self {
        self.imports = imports;
        self
    }

    pub fn with_dev_imports(mut self, dev_imports: Vec<ImportEntry>) -> Self {
        self.dev_imports = dev_imports;
        self
    }

    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    pub fn imports(&self) -> &[ImportEntry] {
        &self.imports
    }

    pub fn dev_imports(&self) -> &[ImportEntry] {
        &self.dev_imports
    }

    /// Regular and dev imports, in manifest order
    pub fn all_imports(&self) -> impl Iterator<Item = &ImportEntry> {
        self.imports.iter().chain(self.dev_imports.iter())
    }

    /// Roots of every imported package, relative to the vendor directory
    pub fn import_roots(&self) -> Vec<PathBuf> {
        self.all_imports().map(ImportEntry::root).collect()
    }

    /// Set of directories holding packages in use
    pub fn used_packages(&self) -> BTreeSet<PathBuf> {
        self.all_imports()
            .flat_map(ImportEntry::package_dirs)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.dev_imports.is_empty()
    }
}
