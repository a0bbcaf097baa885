//! Removal plan entity
//!
//! The output of the planning phase: which vendor entries go away, and how.
//! Paths are always relative to the vendor root.

use std::fmt;
use std::path::{Path, PathBuf};

/// A filesystem entry seen during the walk
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreeEntry {
    relative_path: PathBuf,
    is_dir: bool,
}

impl TreeEntry {
    pub fn file(relative_path: impl Into<PathBuf>) -> Self {
        Self {
            relative_path: relative_path.into(),
            is_dir: false,
        }
    }

    pub fn dir(relative_path: impl Into<PathBuf>) -> Self {
        Self {
            relative_path: relative_path.into(),
            is_dir: true,
        }
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// Number of path components (the vendor root has depth 0)
    pub fn depth(&self) -> usize {
        self.relative_path.components().count()
    }
}

/// How a planned entry is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemovalKind {
    /// A file rejected by the classifier
    File,
    /// A directory left with no surviving descendants
    EmptyDir,
    /// A nested vendor tree, removed with all of its contents
    NestedVendor,
}

impl RemovalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemovalKind::File => "file",
            RemovalKind::EmptyDir => "empty_dir",
            RemovalKind::NestedVendor => "nested_vendor",
        }
    }
}

impl fmt::Display for RemovalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRemoval {
    pub entry: TreeEntry,
    pub kind: RemovalKind,
}

impl PlannedRemoval {
    pub fn new(entry: TreeEntry, kind: RemovalKind) -> Self {
        Self { entry, kind }
    }

    pub fn path(&self) -> &Path {
        self.entry.relative_path()
    }
}

/// Ordered list of removals, deepest path first.
///
/// Children always precede their parent directory, so by the time an
/// `EmptyDir` entry is reached everything below it is already gone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalPlan {
    entries: Vec<PlannedRemoval>,
}

impl RemovalPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a plan from unordered removals
    pub fn from_removals(entries: Vec<PlannedRemoval>) -> Self {
        let mut plan = Self { entries };
        plan.sort_deepest_first();
        plan
    }

    pub fn push(&mut self, removal: PlannedRemoval) {
        self.entries.push(removal);
    }

    /// Order entries deepest-first, ties broken by path for stable output
    pub fn sort_deepest_first(&mut self) {
        self.entries.sort_by(|a, b| {
            b.entry
                .depth()
                .cmp(&a.entry.depth())
                .then_with(|| a.path().cmp(b.path()))
        });
    }

    pub fn entries(&self) -> &[PlannedRemoval] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlannedRemoval> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, kind: RemovalKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|e| e.path() == path)
    }
}

impl IntoIterator for RemovalPlan {
    type Item = PlannedRemoval;
    type IntoIter = std::vec::IntoIter<PlannedRemoval>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a RemovalPlan {
    type Item = &'a PlannedRemoval;
    type IntoIter = std::slice::Iter<'a, PlannedRemoval>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
