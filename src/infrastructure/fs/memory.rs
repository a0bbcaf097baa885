//! In-memory File System
//!
//! A tree held in a map, used to exercise planning and execution without
//! touching disk. Reads and removals can be made to fail per path.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::domain::ports::file_system::{DirEntryInfo, EntryKind, FileSystem};

#[derive(Debug, Default)]
struct MemoryState {
    entries: BTreeMap<PathBuf, EntryKind>,
    failing_reads: BTreeSet<PathBuf>,
    failing_removals: BTreeSet<PathBuf>,
}

/// In-memory file system
#[derive(Debug, Default)]
pub struct MemoryFs {
    state: Mutex<MemoryState>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tree rooted at `root` holding `files` (relative paths)
    pub fn with_files<I, S>(root: impl AsRef<Path>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<Path>,
    {
        let fs = Self::new();
        let root = root.as_ref();
        fs.add_dir(root);
        for file in files {
            fs.add_file(root.join(file));
        }
        fs
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn add_ancestors(state: &mut MemoryState, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            state
                .entries
                .entry(ancestor.to_path_buf())
                .or_insert(EntryKind::Dir);
        }
    }

    /// Add a directory and any missing parents
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut state = self.state();
        Self::add_ancestors(&mut state, path);
        state.entries.insert(path.to_path_buf(), EntryKind::Dir);
    }

    /// Add a file and any missing parents
    pub fn add_file(&self, path: impl AsRef<Path>) {
        let path = path.as_ref();
        let mut state = self.state();
        Self::add_ancestors(&mut state, path);
        state.entries.insert(path.to_path_buf(), EntryKind::File);
    }

    /// Make `read_dir` on `path` fail with permission denied
    pub fn fail_read(&self, path: impl AsRef<Path>) {
        self.state()
            .failing_reads
            .insert(path.as_ref().to_path_buf());
    }

    /// Make any removal of `path` fail with permission denied
    pub fn fail_removal(&self, path: impl AsRef<Path>) {
        self.state()
            .failing_removals
            .insert(path.as_ref().to_path_buf());
    }

    /// All entries strictly below `root`, relative to it
    pub fn entries_under(&self, root: impl AsRef<Path>) -> BTreeMap<PathBuf, EntryKind> {
        let root = root.as_ref();
        self.state()
            .entries
            .iter()
            .filter(|(path, _)| path.as_path() != root)
            .filter_map(|(path, kind)| {
                path.strip_prefix(root)
                    .ok()
                    .map(|rel| (rel.to_path_buf(), *kind))
            })
            .collect()
    }

    fn check_removal(state: &MemoryState, path: &Path) -> io::Result<()> {
        if state.failing_removals.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        Ok(())
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("no such entry: {}", path.display()),
    )
}

impl FileSystem for MemoryFs {
    fn entry_kind(&self, path: &Path) -> io::Result<Option<EntryKind>> {
        Ok(self.state().entries.get(path).copied())
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>> {
        let state = self.state();
        if state.failing_reads.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        match state.entries.get(path).copied() {
            Some(EntryKind::Dir) => {}
            Some(EntryKind::File) => {
                return Err(io::Error::new(
                    io::ErrorKind::Other,
                    format!("not a directory: {}", path.display()),
                ))
            }
            None => return Err(not_found(path)),
        }

        let mut children: Vec<DirEntryInfo> = state
            .entries
            .iter()
            .filter(|(child, _)| child.parent() == Some(path))
            .filter_map(|(child, kind)| {
                child
                    .file_name()
                    .map(|name| DirEntryInfo::new(name.to_os_string(), *kind))
            })
            .collect();
        children.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(children)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state();
        Self::check_removal(&state, path)?;
        match state.entries.get(path).copied() {
            Some(EntryKind::File) => {
                state.entries.remove(path);
                Ok(())
            }
            Some(EntryKind::Dir) => Err(io::Error::new(
                io::ErrorKind::Other,
                format!("is a directory: {}", path.display()),
            )),
            None => Err(not_found(path)),
        }
    }

    fn remove_empty_dir(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state();
        Self::check_removal(&state, path)?;
        match state.entries.get(path).copied() {
            Some(EntryKind::Dir) => {}
            Some(EntryKind::File) => {
                return Err(io::Error::new(
                    io::ErrorKind::Other,
                    format!("not a directory: {}", path.display()),
                ))
            }
            None => return Err(not_found(path)),
        }
        if state.entries.keys().any(|p| p.parent() == Some(path)) {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("directory not empty: {}", path.display()),
            ));
        }
        state.entries.remove(path);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state();
        Self::check_removal(&state, path)?;
        if !state.entries.contains_key(path) {
            return Err(not_found(path));
        }
        state.entries.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_files_creates_parent_dirs() {
        let fs = MemoryFs::with_files("/v", ["a/b/c.go"]);
        assert!(fs.is_dir(Path::new("/v/a")));
        assert!(fs.is_dir(Path::new("/v/a/b")));
        assert_eq!(
            fs.entry_kind(Path::new("/v/a/b/c.go")).unwrap(),
            Some(EntryKind::File)
        );
    }

    #[test]
    fn read_dir_lists_direct_children_only() {
        let fs = MemoryFs::with_files("/v", ["a/x.go", "a/b/y.go", "z.go"]);
        let names: Vec<_> = fs
            .read_dir(Path::new("/v"))
            .unwrap()
            .into_iter()
            .map(|c| c.name.to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a", "z.go"]);
    }

    #[test]
    fn remove_empty_dir_refuses_non_empty() {
        let fs = MemoryFs::with_files("/v", ["a/x.go"]);
        assert!(fs.remove_empty_dir(Path::new("/v/a")).is_err());
        fs.remove_file(Path::new("/v/a/x.go")).unwrap();
        fs.remove_empty_dir(Path::new("/v/a")).unwrap();
        assert!(!fs.exists(Path::new("/v/a")));
    }

    #[test]
    fn remove_dir_all_drops_subtree() {
        let fs = MemoryFs::with_files("/v", ["a/vendor/x/y.go", "a/keep.go"]);
        fs.remove_dir_all(Path::new("/v/a/vendor")).unwrap();
        let left: Vec<_> = fs.entries_under("/v").into_keys().collect();
        assert_eq!(left, vec![PathBuf::from("a"), PathBuf::from("a/keep.go")]);
    }

    #[test]
    fn injected_failures() {
        let fs = MemoryFs::with_files("/v", ["a/x.go"]);
        fs.fail_read("/v/a");
        fs.fail_removal("/v/a/x.go");
        assert!(fs.read_dir(Path::new("/v/a")).is_err());
        assert!(fs.remove_file(Path::new("/v/a/x.go")).is_err());
    }
}
