//! Glide Lock Repository
//!
//! Implements the LockManifestRepository port for `glide.lock` (YAML).

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::domain::entities::{is_valid_import_path, ImportEntry, LockManifest};
use crate::domain::ports::LockManifestRepository;
use crate::error::{VendorCleanError, VendorCleanResult};

/// Name of the lock manifest inside the project root
pub const GLIDE_LOCK_FILE: &str = "glide.lock";

/// YAML representation of one import
#[derive(Debug, Clone, Deserialize)]
struct YamlImport {
    name: String,
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    subpackages: Vec<String>,
}

/// YAML representation of the lock file; unknown keys are ignored
#[derive(Debug, Clone, Deserialize)]
struct YamlGlideLock {
    #[serde(default)]
    hash: Option<String>,
    #[serde(default)]
    imports: Option<Vec<YamlImport>>,
    #[serde(default, rename = "devImports")]
    dev_imports: Option<Vec<YamlImport>>,
}

/// `glide.lock` reader
#[derive(Debug, Clone, Copy, Default)]
pub struct GlideLockRepository;

impl GlideLockRepository {
    pub fn new() -> Self {
        Self
    }

    /// Parse manifest content; `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> VendorCleanResult<LockManifest> {
        let parse_error = |message: String| VendorCleanError::ManifestParse {
            path: path.to_path_buf(),
            message,
        };

        // An empty document deserializes to nothing; treat it as an empty lock.
        if content.trim().is_empty() {
            return Ok(LockManifest::new());
        }

        let raw: YamlGlideLock =
            serde_yaml_ng::from_str(content).map_err(|e| parse_error(e.to_string()))?;

        let convert = |imports: Option<Vec<YamlImport>>| -> VendorCleanResult<Vec<ImportEntry>> {
            imports
                .unwrap_or_default()
                .into_iter()
                .map(|import| {
                    if !is_valid_import_path(&import.name) {
                        return Err(parse_error(format!(
                            "invalid import name '{}'",
                            import.name
                        )));
                    }
                    let mut entry =
                        ImportEntry::new(import.name).with_subpackages(import.subpackages);
                    if let Some(version) = import.version {
                        entry = entry.with_version(version);
                    }
                    Ok(entry)
                })
                .collect()
        };

        let mut manifest = LockManifest::new()
            .with_imports(convert(raw.imports)?)
            .with_dev_imports(convert(raw.dev_imports)?);
        if let Some(hash) = raw.hash {
            manifest = manifest.with_hash(hash);
        }
        Ok(manifest)
    }
}

impl LockManifestRepository for GlideLockRepository {
    fn file_name(&self) -> &'static str {
        GLIDE_LOCK_FILE
    }

    fn load(&self, path: &Path) -> VendorCleanResult<LockManifest> {
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => VendorCleanError::ManifestNotFound {
                path: path.to_path_buf(),
            },
            _ => VendorCleanError::ManifestParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        })?;
        let manifest = Self::parse(&content, path)?;
        log::debug!(
            "loaded {} ({} imports, {} dev imports)",
            path.display(),
            manifest.imports().len(),
            manifest.dev_imports().len()
        );
        Ok(manifest)
    }
}
