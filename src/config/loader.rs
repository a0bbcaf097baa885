//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{VendorCleanError, VendorCleanResult};

use super::types::Config;

/// Config file looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "vendorclean.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> VendorCleanResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| VendorCleanError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| VendorCleanError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Project config if present, else user config if present, else defaults.
///
/// A file that exists but does not parse is an error, not a fallback.
pub fn load_layered(
    project_root: &Path,
    user_config: Option<&Path>,
) -> VendorCleanResult<(Config, Vec<ConfigWarning>)> {
    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    if project_config.is_file() {
        log::debug!("using config {}", project_config.display());
        return load_with_warnings(&project_config);
    }

    if let Some(user_config) = user_config.filter(|p| p.is_file()) {
        log::debug!("using config {}", user_config.display());
        return load_with_warnings(user_config);
    }

    Ok((Config::default(), Vec::new()))
}

/// `<config dir>/vendorclean/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vendorclean").join("config.toml"))
}

/// Apply environment variable overrides (VENDORCLEAN_* prefix)
pub fn with_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    let flags: [(&str, &mut bool); 4] = [
        ("VENDORCLEAN_ONLY_GO", &mut config.clean.only_go),
        ("VENDORCLEAN_NO_TESTS", &mut config.clean.no_tests),
        (
            "VENDORCLEAN_KEEP_LEGAL_FILES",
            &mut config.clean.keep_legal_files,
        ),
        ("VENDORCLEAN_USE_LOCK_FILE", &mut config.clean.use_lock_file),
    ];

    for (key, slot) in flags {
        if let Some(value) = get_env(key) {
            match parse_bool(&value) {
                Some(flag) => *slot = flag,
                None => log::warn!("ignoring {}={:?}: expected a boolean", key, value),
            }
        }
    }

    // VENDORCLEAN_KEEP (comma-separated)
    if let Some(keep) = get_env("VENDORCLEAN_KEEP") {
        config.clean.keep = keep
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
    }

    config
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "clean",
        "only_go",
        "no_tests",
        "keep_legal_files",
        "use_lock_file",
        "keep",
        "output",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
