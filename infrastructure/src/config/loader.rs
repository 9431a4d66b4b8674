//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Environment variables with this prefix override file values;
/// `__` separates sections (`ORGSETTINGS_CONNECTION__TOKEN`).
pub const ENV_PREFIX: &str = "ORGSETTINGS_";

const PROJECT_FILENAMES: [&str; 2] = ["orgsettings.toml", ".orgsettings.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. `ORGSETTINGS_*` environment variables
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./orgsettings.toml` or `./.orgsettings.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/orgsettings/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(Path::new("."), config_path)
            .extract()
            .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    fn figment(project_dir: &Path, config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_in(project_dir) {
            figment = figment.merge(Toml::file(path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/orgsettings/config.toml if set,
    /// otherwise falls back to ~/.config/orgsettings/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("orgsettings").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::project_config_in(Path::new("."))
    }

    fn project_config_in(dir: &Path) -> Option<PathBuf> {
        PROJECT_FILENAMES
            .iter()
            .map(|filename| dir.join(filename))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for --show-config)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        println!("  [ENV  ] Environment: {}*", ENV_PREFIX);

        if let Some(path) = config_path {
            let marker = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Explicit: {}", marker, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./orgsettings.toml or ./.orgsettings.toml");
        }

        if let Some(path) = Self::global_config_path() {
            let marker = if path.exists() { "FOUND" } else { "     " };
            println!("  [{}] Global:  {}", marker, path.display());
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert!(config.output.color);
        assert!(config.connection.url.is_none());
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("orgsettings"));
    }

    #[test]
    fn test_explicit_file_overrides_project_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(".orgsettings.toml"),
            "[output]\ncolor = false\nnotification_duration_ms = 1000\n",
        )
        .unwrap();
        let explicit = dir.path().join("custom.toml");
        fs::write(&explicit, "[output]\nnotification_duration_ms = 9000\n").unwrap();

        let config: FileConfig = ConfigLoader::figment(dir.path(), Some(&explicit))
            .extract()
            .unwrap();

        assert!(!config.output.color);
        assert_eq!(config.output.notification_duration_ms, 9000);
        assert_eq!(config.connection.api_version, "v9.2");
    }

    #[test]
    fn test_project_file_discovery_prefers_plain_name() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ConfigLoader::project_config_in(dir.path()).is_none());

        fs::write(dir.path().join(".orgsettings.toml"), "").unwrap();
        fs::write(dir.path().join("orgsettings.toml"), "").unwrap();

        assert_eq!(
            ConfigLoader::project_config_in(dir.path()),
            Some(dir.path().join("orgsettings.toml"))
        );
    }
}
