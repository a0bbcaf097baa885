//! Path classifier
//!
//! Decides keep/remove for a single vendor entry. Rules are evaluated in a
//! fixed precedence; the last rule with an opinion wins and the starting
//! decision is `Keep`. New options become new rules, inserted at their place
//! in the list, never extra branches elsewhere.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::KeepPatterns;

/// Source file suffix for Go packages
pub const GO_SOURCE_SUFFIX: &str = ".go";

/// Test file suffix for Go packages
pub const GO_TEST_SUFFIX: &str = "_test.go";

/// Lowercase basename prefixes that identify legal files
pub const LEGAL_FILE_PREFIXES: &[&str] = &[
    "licen",
    "copying",
    "copyright",
    "copyleft",
    "unlicense",
    "legal",
    "notice",
    "disclaimer",
    "patent",
    "third-party",
    "thirdparty",
    "authors",
    "contributors",
];

/// Outcome of classifying one entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Keep,
    Remove,
}

/// A predicate paired with the decision it yields when it matches
#[derive(Debug, Clone)]
pub enum Rule {
    /// Files that are not Go sources are removed
    NonGoSource,
    /// Legal files are kept
    LegalFile,
    /// Files outside the packages listed in the lock manifest are removed
    OutsideUsedPackages(BTreeSet<PathBuf>),
    /// Go test files are removed
    TestFile,
    /// Files matching a user keep pattern are kept
    KeepPattern(KeepPatterns),
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::NonGoSource => "only-go",
            Rule::LegalFile => "keep-legal-files",
            Rule::OutsideUsedPackages(_) => "use-lock-file",
            Rule::TestFile => "no-tests",
            Rule::KeepPattern(_) => "keep",
        }
    }

    /// Decision this rule yields when its predicate matches
    pub fn decision(&self) -> Decision {
        match self {
            Rule::NonGoSource | Rule::OutsideUsedPackages(_) | Rule::TestFile => Decision::Remove,
            Rule::LegalFile | Rule::KeepPattern(_) => Decision::Keep,
        }
    }

    /// Whether this rule has an opinion about the file at `rel_path`
    pub fn matches(&self, rel_path: &Path) -> bool {
        let name = file_name(rel_path);
        match self {
            Rule::NonGoSource => !name.ends_with(GO_SOURCE_SUFFIX),
            Rule::LegalFile => is_legal_file(&name),
            Rule::OutsideUsedPackages(used) => {
                let dir = rel_path.parent().unwrap_or_else(|| Path::new(""));
                !used.contains(dir)
            }
            Rule::TestFile => name.ends_with(GO_TEST_SUFFIX),
            Rule::KeepPattern(patterns) => patterns.is_kept(rel_path, false),
        }
    }
}

fn file_name(rel_path: &Path) -> String {
    rel_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Returns true for license, copying, notice and similar files
pub fn is_legal_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    LEGAL_FILE_PREFIXES.iter().any(|p| lower.starts_with(p))
}

/// Which rules are active
#[derive(Debug, Clone, Default)]
pub struct ClassifierSettings {
    pub only_go: bool,
    pub keep_legal_files: bool,
    /// Package directories in use; `None` disables lock-file filtering
    pub used_packages: Option<BTreeSet<PathBuf>>,
    pub no_tests: bool,
    pub keep: KeepPatterns,
}

/// Ordered rule list applied to every file
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Classifier {
    /// Build the rule list in its fixed precedence
    pub fn new(settings: ClassifierSettings) -> Self {
        let mut rules = Vec::new();
        if settings.only_go {
            rules.push(Rule::NonGoSource);
        }
        if settings.keep_legal_files {
            rules.push(Rule::LegalFile);
        }
        if let Some(used) = settings.used_packages {
            rules.push(Rule::OutsideUsedPackages(used));
        }
        if settings.no_tests {
            rules.push(Rule::TestFile);
        }
        if !settings.keep.is_empty() {
            rules.push(Rule::KeepPattern(settings.keep));
        }
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Classify an entry. Directories are always kept here; their fate is
    /// decided by the walker once their children are known.
    pub fn classify(&self, rel_path: &Path, is_dir: bool) -> Decision {
        if is_dir {
            return Decision::Keep;
        }
        self.rules
            .iter()
            .filter(|rule| rule.matches(rel_path))
            .map(Rule::decision)
            .last()
            .unwrap_or(Decision::Keep)
    }

    /// Name of the rule that produced the decision, if any
    pub fn deciding_rule(&self, rel_path: &Path, is_dir: bool) -> Option<&'static str> {
        if is_dir {
            return None;
        }
        self.rules
            .iter()
            .filter(|rule| rule.matches(rel_path))
            .last()
            .map(Rule::name)
    }
}
