//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::clean::CleanOptions;
use crate::error::VendorCleanResult;

use super::loader::{self, ConfigWarning};

/// `[clean]` section: default filtering options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CleanConfig {
    #[serde(default)]
    pub only_go: bool,

    #[serde(default)]
    pub no_tests: bool,

    #[serde(default)]
    pub keep_legal_files: bool,

    #[serde(default)]
    pub use_lock_file: bool,

    /// Gitignore-style patterns for files that always survive
    #[serde(default)]
    pub keep: Vec<String>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub clean: CleanConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> VendorCleanResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> VendorCleanResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the project config, else the user config, else defaults, then
    /// apply `VENDORCLEAN_*` environment overrides.
    pub fn load_for_project(
        project_root: &Path,
    ) -> VendorCleanResult<(Self, Vec<ConfigWarning>)> {
        let user_config = loader::user_config_path();
        let (config, warnings) = loader::load_layered(project_root, user_config.as_deref())?;
        Ok((config.with_env_overrides(), warnings))
    }

    /// Apply environment variable overrides (VENDORCLEAN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |key| std::env::var(key).ok())
    }

    /// Clean options described by this config
    pub fn clean_options(&self) -> CleanOptions {
        CleanOptions::new()
            .with_only_go(self.clean.only_go)
            .with_no_tests(self.clean.no_tests)
            .with_keep_legal_files(self.clean.keep_legal_files)
            .with_use_lock_file(self.clean.use_lock_file)
            .with_keep(self.clean.keep.iter().cloned())
    }
}
