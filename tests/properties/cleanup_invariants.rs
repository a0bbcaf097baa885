//! Property tests for whole-tree cleanup on generated vendor trees.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use proptest::prelude::*;

use vendorclean::domain::ports::{EntryKind, LockManifestRepository};
use vendorclean::infrastructure::MemoryFs;
use vendorclean::{CleanOptions, CleanUseCase, ImportEntry, LockManifest, VendorCleanResult};

const VENDOR_ROOT: &str = "/p/vendor";

struct FixedManifest;

impl LockManifestRepository for FixedManifest {
    fn file_name(&self) -> &'static str {
        "glide.lock"
    }

    fn load(&self, _path: &Path) -> VendorCleanResult<LockManifest> {
        Ok(LockManifest::new().with_imports(vec![
            ImportEntry::new("a"),
            ImportEntry::new("pkg/a").with_subpackages(["b"]),
        ]))
    }
}

fn segment() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("a"), Just("b"), Just("pkg"), Just("vendor")]
}

fn file_name() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("x.go"),
        Just("x_test.go"),
        Just("README"),
        Just("LICENSE"),
        Just("notes.md"),
    ]
}

fn file_path() -> impl Strategy<Value = PathBuf> {
    (proptest::collection::vec(segment(), 0..=3), file_name()).prop_map(|(dirs, name)| {
        let mut path: PathBuf = dirs.iter().collect();
        path.push(name);
        path
    })
}

fn dir_path() -> impl Strategy<Value = PathBuf> {
    proptest::collection::vec(segment(), 1..=3).prop_map(|dirs| dirs.iter().collect())
}

fn tree() -> impl Strategy<Value = MemoryFs> {
    (
        proptest::collection::vec(file_path(), 0..12),
        proptest::collection::vec(dir_path(), 0..4),
    )
        .prop_map(|(files, dirs)| {
            let fs = MemoryFs::with_files(VENDOR_ROOT, files);
            for dir in dirs {
                fs.add_dir(Path::new(VENDOR_ROOT).join(dir));
            }
            fs
        })
}

fn options() -> impl Strategy<Value = CleanOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(only_go, no_tests, legal)| {
        CleanOptions::new()
            .with_only_go(only_go)
            .with_no_tests(no_tests)
            .with_keep_legal_files(legal)
    })
}

fn files(fs: &MemoryFs) -> BTreeSet<PathBuf> {
    fs.entries_under(VENDOR_ROOT)
        .into_iter()
        .filter(|(_, kind)| *kind == EntryKind::File)
        .map(|(path, _)| path)
        .collect()
}

fn dirs(fs: &MemoryFs) -> BTreeSet<PathBuf> {
    fs.entries_under(VENDOR_ROOT)
        .into_iter()
        .filter(|(_, kind)| *kind == EntryKind::Dir)
        .map(|(path, _)| path)
        .collect()
}

fn name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn has_vendor_component(path: &Path) -> bool {
    path.iter().any(|c| c == "vendor")
}

/// Whether a file outside any vendor tree survives the given options
fn expected_to_survive(path: &Path, options: &CleanOptions) -> bool {
    let name = name_of(path);
    let mut keep = true;
    if options.only_go && !name.ends_with(".go") {
        keep = false;
    }
    if options.keep_legal_files && name == "LICENSE" {
        keep = true;
    }
    if options.no_tests && name.ends_with("_test.go") {
        keep = false;
    }
    keep
}

fn run(fs: &MemoryFs, options: &CleanOptions) {
    let use_case = CleanUseCase::new(FixedManifest, fs);
    let report = use_case
        .execute(Path::new("/p"), options)
        .expect("cleanup of an in-memory tree");
    assert!(report.failures.is_empty(), "failures: {:?}", report.failures);
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a second run with the same options plans nothing.
    #[test]
    fn property_cleanup_is_idempotent(fs in tree(), options in options()) {
        run(&fs, &options);
        let after_first = fs.entries_under(VENDOR_ROOT);

        let use_case = CleanUseCase::new(FixedManifest, &fs);
        let second = use_case.execute(Path::new("/p"), &options).unwrap();

        prop_assert!(second.is_noop());
        prop_assert_eq!(fs.entries_under(VENDOR_ROOT), after_first);
    }

    /// PROPERTY: cleanup never adds files.
    #[test]
    fn property_result_is_subset(fs in tree(), options in options()) {
        let before = files(&fs);
        run(&fs, &options);
        prop_assert!(files(&fs).is_subset(&before));
    }

    /// PROPERTY: with only_go every remaining file is a Go source, unless it
    /// is a legal file explicitly kept.
    #[test]
    fn property_only_go_leaves_go_sources(fs in tree(), legal in any::<bool>()) {
        let options = CleanOptions::new().with_only_go(true).with_keep_legal_files(legal);
        run(&fs, &options);
        for file in files(&fs) {
            let name = name_of(&file);
            prop_assert!(name.ends_with(".go") || (legal && name == "LICENSE"), "left {:?}", file);
        }
    }

    /// PROPERTY: with no_tests no test file remains, whatever only_go says.
    #[test]
    fn property_no_tests_removes_tests(fs in tree(), only_go in any::<bool>()) {
        let options = CleanOptions::new().with_no_tests(true).with_only_go(only_go);
        run(&fs, &options);
        for file in files(&fs) {
            prop_assert!(!name_of(&file).ends_with("_test.go"), "left {:?}", file);
        }
    }

    /// PROPERTY: no nested vendor directory survives, under any options.
    #[test]
    fn property_nested_vendor_is_gone(fs in tree(), options in options()) {
        run(&fs, &options);
        for path in fs.entries_under(VENDOR_ROOT).keys() {
            prop_assert!(!has_vendor_component(path), "left {:?}", path);
        }
    }

    /// PROPERTY: surviving files are exactly those the rules keep, and the
    /// surviving directories are exactly their ancestors.
    #[test]
    fn property_survivors_and_directory_pruning(fs in tree(), options in options()) {
        let expected_files: BTreeSet<PathBuf> = files(&fs)
            .into_iter()
            .filter(|f| !has_vendor_component(f) && expected_to_survive(f, &options))
            .collect();
        let expected_dirs: BTreeSet<PathBuf> = expected_files
            .iter()
            .flat_map(|f| f.ancestors().skip(1).map(Path::to_path_buf).collect::<Vec<_>>())
            .filter(|d| !d.as_os_str().is_empty())
            .collect();

        run(&fs, &options);

        prop_assert_eq!(files(&fs), expected_files);
        prop_assert_eq!(dirs(&fs), expected_dirs);
    }

    /// PROPERTY: a dry run reports the same entries a real run removes.
    #[test]
    fn property_dry_run_matches_real_run(fs in tree(), options in options()) {
        let before = fs.entries_under(VENDOR_ROOT);
        let use_case = CleanUseCase::new(FixedManifest, &fs);

        let dry = use_case
            .execute(Path::new("/p"), &options.clone().with_dry_run(true))
            .unwrap();
        prop_assert_eq!(fs.entries_under(VENDOR_ROOT), before);

        let real = use_case.execute(Path::new("/p"), &options).unwrap();
        prop_assert_eq!(dry.removed_paths(), real.removed_paths());
    }
}
