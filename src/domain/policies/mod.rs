//! Domain Policies
//!
//! Business rules that govern which vendor files survive.
//! These are pure functions that operate on relative paths.

mod classifier;

pub use classifier::{
    is_legal_file, Classifier, ClassifierSettings, Decision, Rule, GO_SOURCE_SUFFIX,
    GO_TEST_SUFFIX, LEGAL_FILE_PREFIXES,
};
