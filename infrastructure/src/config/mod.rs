//! Configuration file loading for orgsettings
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ORGSETTINGS_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./orgsettings.toml` or `./.orgsettings.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/orgsettings/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileCatalogConfig, FileConfig, FileConnectionConfig, FileOutputConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
