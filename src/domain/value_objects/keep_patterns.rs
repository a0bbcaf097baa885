//! Keep patterns value object
//!
//! User-supplied patterns naming vendor files that must survive cleanup,
//! matched with gitignore semantics relative to the vendor root.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::fmt;
use std::path::Path;

/// Maximum number of patterns allowed
const MAX_PATTERNS: usize = 1000;

/// Compiled set of keep patterns.
///
/// Uses the `ignore` crate for gitignore-compatible matching.
#[derive(Debug, Clone)]
pub struct KeepPatterns {
    matcher: Gitignore,
    patterns: Vec<String>,
}

impl Default for KeepPatterns {
    fn default() -> Self {
        Self::empty()
    }
}

impl KeepPatterns {
    /// Create an empty pattern set (matches nothing).
    pub fn empty() -> Self {
        Self {
            matcher: Gitignore::empty(),
            patterns: Vec::new(),
        }
    }

    /// Compile patterns. Blank entries and `#` comments are skipped.
    pub fn new<I, S>(patterns: I) -> Result<Self, KeepPatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = GitignoreBuilder::new("");
        let mut kept = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref().trim();
            if pattern.is_empty() || pattern.starts_with('#') {
                continue;
            }

            if kept.len() == MAX_PATTERNS {
                return Err(KeepPatternError::TooMany {
                    limit: MAX_PATTERNS,
                });
            }

            builder
                .add_line(None, pattern)
                .map_err(|e| KeepPatternError::Invalid {
                    pattern: pattern.to_string(),
                    message: e.to_string(),
                })?;
            kept.push(pattern.to_string());
        }

        let matcher = builder
            .build()
            .map_err(|e| KeepPatternError::BuildFailed(e.to_string()))?;

        Ok(Self {
            matcher,
            patterns: kept,
        })
    }

    /// Check whether a path relative to the vendor root must be kept.
    pub fn is_kept(&self, rel_path: &Path, is_dir: bool) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        self.matcher
            .matched_path_or_any_parents(rel_path, is_dir)
            .is_ignore()
    }

    /// Patterns as given, minus blanks and comments
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Errors that can occur when compiling keep patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeepPatternError {
    /// More patterns than the matcher accepts
    TooMany { limit: usize },
    /// A pattern has invalid syntax
    Invalid { pattern: String, message: String },
    /// Failed to build the matcher
    BuildFailed(String),
}

impl fmt::Display for KeepPatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooMany { limit } => write!(f, "more than {} keep patterns", limit),
            Self::Invalid { pattern, message } => {
                write!(f, "invalid keep pattern '{}': {}", pattern, message)
            }
            Self::BuildFailed(msg) => write!(f, "failed to build keep matcher: {}", msg),
        }
    }
}

impl std::error::Error for KeepPatternError {}
