#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use vendorclean::domain::policies::ClassifierSettings;
use vendorclean::domain::value_objects::KeepPatterns;
use vendorclean::{Classifier, Decision};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let flags = data[0];
    let Ok(rest) = std::str::from_utf8(&data[1..]) else {
        return;
    };
    let (pattern, path) = rest.split_once('\n').unwrap_or(("", rest));

    let keep = KeepPatterns::new([pattern]).unwrap_or_else(|_| KeepPatterns::empty());
    let classifier = Classifier::new(ClassifierSettings {
        only_go: flags & 1 != 0,
        keep_legal_files: flags & 2 != 0,
        used_packages: None,
        no_tests: flags & 4 != 0,
        keep,
    });

    // The walker only ever hands out paths relative to the vendor root.
    let path = Path::new(path);
    if path.has_root() {
        return;
    }
    assert_eq!(classifier.classify(path, true), Decision::Keep);
    let _ = classifier.classify(path, false);
    let _ = classifier.deciding_rule(path, false);
});
