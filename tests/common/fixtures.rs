//! Reusable vendor trees and lock manifests.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Lock manifest for the reference tree
pub const GLIDE_LOCK: &str = r#"hash: 4e9eb8fc04548f539b83a52ce8c2001573802b21c903fca974442e79b4690713
updated: 2016-03-04T15:02:44.735574617+01:00
imports:
- name: host01/org01/repo01
  version: 76626ae9c91c4f2a10f34cad8ce83ea42c93bb75
  subpackages:
  - subpkg01
devImports: []
"#;

/// Files of the reference tree, relative to `vendor/`
pub const FIXTURE_FILES: &[&str] = &[
    "host01/org01/repo01/README",
    "host01/org01/repo01/LICENSE",
    "host01/org01/repo01/file01.go",
    "host01/org01/repo01/file01_test.go",
    "host01/org01/repo01/subpkg01/file02.go",
    "host01/org01/repo01/subpkg01/file02_test.go",
    "host01/org01/repo01/vendor/host01/org02/repo01/README",
    "host01/org01/repo01/vendor/host01/org02/repo01/file03.go",
    "host01/org01/repo01/vendor/host01/org02/repo01/file03_test.go",
];

/// Write `files` below `root`, creating parents. Content is the path itself.
pub fn write_tree(root: &Path, files: &[&str]) {
    for file in files {
        let path = root.join(file);
        fs::create_dir_all(path.parent().expect("file has a parent")).expect("create dirs");
        fs::write(&path, file).expect("write file");
    }
}

/// Reference project: `vendor/` with the fixture tree plus `glide.lock`
pub fn write_fixture_project(project_root: &Path) {
    write_tree(&project_root.join("vendor"), FIXTURE_FILES);
    fs::write(project_root.join("glide.lock"), GLIDE_LOCK).expect("write glide.lock");
}

fn walk(root: &Path, dir: &Path, files: &mut BTreeSet<String>, dirs: &mut BTreeSet<String>) {
    for entry in fs::read_dir(dir).expect("read dir") {
        let entry = entry.expect("dir entry");
        let path = entry.path();
        let rel = path
            .strip_prefix(root)
            .expect("below root")
            .to_string_lossy()
            .replace('\\', "/");
        if entry.file_type().expect("file type").is_dir() {
            dirs.insert(rel);
            walk(root, &path, files, dirs);
        } else {
            files.insert(rel);
        }
    }
}

/// Files below `root`, relative and `/`-separated
pub fn files_under(root: &Path) -> BTreeSet<String> {
    let (mut files, mut dirs) = (BTreeSet::new(), BTreeSet::new());
    walk(root, root, &mut files, &mut dirs);
    files
}

/// Directories below `root`, relative and `/`-separated
pub fn dirs_under(root: &Path) -> BTreeSet<String> {
    let (mut files, mut dirs) = (BTreeSet::new(), BTreeSet::new());
    walk(root, root, &mut files, &mut dirs);
    dirs
}

/// Build an owned set from string slices
pub fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}
