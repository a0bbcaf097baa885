//! Property tests for the path classifier.

use std::path::PathBuf;

use proptest::prelude::*;

use vendorclean::domain::policies::{is_legal_file, ClassifierSettings, LEGAL_FILE_PREFIXES};
use vendorclean::domain::value_objects::KeepPatterns;
use vendorclean::{Classifier, Decision};

fn rel_path() -> impl Strategy<Value = PathBuf> {
    let segment = proptest::string::string_regex("[a-z][a-z0-9_.-]{0,11}").unwrap();
    proptest::collection::vec(segment, 1..=4).prop_map(|segments| segments.iter().collect())
}

fn settings(only_go: bool, legal: bool, no_tests: bool) -> ClassifierSettings {
    ClassifierSettings {
        only_go,
        keep_legal_files: legal,
        used_packages: None,
        no_tests,
        keep: KeepPatterns::empty(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: directories are always kept.
    #[test]
    fn property_directories_are_kept(
        path in rel_path(),
        only_go in any::<bool>(),
        legal in any::<bool>(),
        no_tests in any::<bool>(),
    ) {
        let classifier = Classifier::new(settings(only_go, legal, no_tests));
        prop_assert_eq!(classifier.classify(&path, true), Decision::Keep);
    }

    /// PROPERTY: with no rules every file is kept.
    #[test]
    fn property_default_keeps_everything(path in rel_path()) {
        let classifier = Classifier::new(ClassifierSettings::default());
        prop_assert_eq!(classifier.classify(&path, false), Decision::Keep);
    }

    /// PROPERTY: test files are removed under no_tests whatever else is set.
    #[test]
    fn property_no_tests_wins_over_only_go(
        dir in rel_path(),
        stem in "[a-z]{1,8}",
        only_go in any::<bool>(),
        legal in any::<bool>(),
    ) {
        let path = dir.join(format!("{stem}_test.go"));
        let classifier = Classifier::new(settings(only_go, legal, true));
        prop_assert_eq!(classifier.classify(&path, false), Decision::Remove);
    }

    /// PROPERTY: a catch-all keep pattern overrides every removal rule.
    #[test]
    fn property_keep_pattern_is_last_word(
        path in rel_path(),
        only_go in any::<bool>(),
        no_tests in any::<bool>(),
    ) {
        let mut settings = settings(only_go, false, no_tests);
        settings.keep = KeepPatterns::new(["*"]).unwrap();
        let classifier = Classifier::new(settings);
        prop_assert_eq!(classifier.classify(&path, false), Decision::Keep);
    }

    /// PROPERTY: legal file detection ignores case.
    #[test]
    fn property_legal_prefixes_ignore_case(
        index in 0..LEGAL_FILE_PREFIXES.len(),
        suffix in "[a-z0-9.]{0,8}",
        upper in any::<bool>(),
    ) {
        let name = format!("{}{}", LEGAL_FILE_PREFIXES[index], suffix);
        let name = if upper { name.to_uppercase() } else { name };
        prop_assert!(is_legal_file(&name));
    }
}
