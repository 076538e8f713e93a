//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::PathBuf;
use tracing::debug;

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["sylcode.toml", ".sylcode.toml"];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./sylcode.toml` or `./.sylcode.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/sylcode/config.toml`
    /// 4. Fallback: `~/.config/sylcode/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        // Add global config (XDG or fallback)
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config: {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        // Add project-level config file
        if let Some(path) = Self::project_config_path() {
            debug!("Loading project config: {}", path.display());
            figment = figment.merge(Toml::file(&path));
        }

        // Add explicit config path (highest priority for files)
        if let Some(path) = config_path {
            debug!("Loading config: {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/sylcode/config.toml if set,
    /// otherwise falls back to ~/.config/sylcode/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("sylcode").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Describe the config file locations being used (for --show-config)
    pub fn describe_config_sources() -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        // Project config
        if let Some(path) = Self::project_config_path() {
            lines.push(format!("  [FOUND] Project: {}", path.display()));
        } else {
            lines.push(format!(
                "  [     ] Project: ./{} or ./{}",
                PROJECT_CONFIG_FILES[0], PROJECT_CONFIG_FILES[1]
            ));
        }

        // Global config
        if let Some(path) = Self::global_config_path() {
            let marker = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", marker, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}
