//! Configuration file loading for sylcode
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./sylcode.toml` or `./.sylcode.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/sylcode/config.toml`
//! 4. Fallback: `~/.config/sylcode/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileEncodingConfig, FileOutputConfig, SUPPORTED_DOMAINS,
};
pub use loader::ConfigLoader;
