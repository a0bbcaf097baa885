//! FileSystem port - abstraction over the vendor tree
//!
//! The walker reads through this trait and the executor mutates through it,
//! so planning can be tested against an in-memory tree.

use std::ffi::OsString;
use std::io;
use std::path::Path;

/// Kind of a directory entry. Symlinks are never followed and count as files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    File,
    Dir,
}

/// One child of a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: OsString,
    pub kind: EntryKind,
}

impl DirEntryInfo {
    pub fn new(name: impl Into<OsString>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - the real disk
/// - `MemoryFs` - in-memory tree for tests and previews
pub trait FileSystem {
    /// Kind of the entry at `path`, or `None` if nothing is there
    fn entry_kind(&self, path: &Path) -> io::Result<Option<EntryKind>>;

    /// Children of a directory, sorted by name
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>>;

    /// Remove a single file (or symlink)
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Remove a directory that must already be empty
    fn remove_empty_dir(&self, path: &Path) -> io::Result<()>;

    /// Remove a directory and everything below it
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Check if anything exists at `path`
    fn exists(&self, path: &Path) -> bool {
        matches!(self.entry_kind(path), Ok(Some(_)))
    }

    /// Check if `path` is a directory
    fn is_dir(&self, path: &Path) -> bool {
        matches!(self.entry_kind(path), Ok(Some(EntryKind::Dir)))
    }
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn entry_kind(&self, path: &Path) -> io::Result<Option<EntryKind>> {
        (**self).entry_kind(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>> {
        (**self).read_dir(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        (**self).remove_file(path)
    }

    fn remove_empty_dir(&self, path: &Path) -> io::Result<()> {
        (**self).remove_empty_dir(path)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).remove_dir_all(path)
    }
}
