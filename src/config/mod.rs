//! Configuration module for vendorclean
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (VENDORCLEAN_*)
//! 3. Project config (`<root>/vendorclean.toml`)
//! 4. User config (`<config dir>/vendorclean/config.toml`)
//! 5. Built-in defaults (lowest priority)
//!
//! Only the first config file found is read. CLI flags can switch an option
//! on but never off.

mod loader;
mod types;

pub use loader::{
    load_layered, user_config_path, with_env_overrides, ConfigWarning, PROJECT_CONFIG_FILE,
};
pub use types::{CleanConfig, ColorMode, Config, OutputConfig};
