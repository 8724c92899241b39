use config::{Config as ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use crate::search::SearchAlgorithm;

/// Configuration for one scan run.
///
/// Values can be loaded from YAML config files and merged with CLI
/// arguments. Locations, in order of precedence:
/// 1. Custom config file passed via `--config`
/// 2. Local `.maskfind.yaml` in the current directory
/// 3. Global `$HOME/.config/maskfind/config.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Mask to scan for, containing up to two `?` wildcards
    #[serde(default)]
    pub mask: String,

    /// File whose lines are scanned
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// Substring-search algorithm ("naive", "boyer-moore" or "horspool")
    #[serde(default)]
    pub algorithm: SearchAlgorithm,

    /// Number of worker threads
    /// Defaults to number of CPU cores if not specified
    #[serde(default = "default_thread_count")]
    pub thread_count: NonZeroUsize,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("input.txt")
}

fn default_thread_count() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN)
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            mask: String::new(),
            input_path: default_input_path(),
            algorithm: SearchAlgorithm::default(),
            thread_count: default_thread_count(),
            log_level: default_log_level(),
        }
    }
}

impl SearchConfig {
    /// Loads configuration from the default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Loads configuration from a specific file
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Default config locations
        let config_files = [
            // Global config
            dirs::config_dir().map(|p| p.join("maskfind/config.yaml")),
            // Local config
            Some(PathBuf::from(".maskfind.yaml")),
            // Custom config
            config_path.map(PathBuf::from),
        ];

        // Add existing config files
        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        // Build and deserialize
        builder.build()?.try_deserialize()
    }

    /// Merges CLI arguments with configuration file values
    pub fn merge_with_cli(mut self, cli_config: SearchConfig) -> Self {
        // CLI values take precedence over config file values
        if !cli_config.mask.is_empty() {
            self.mask = cli_config.mask;
        }
        if cli_config.input_path != default_input_path() {
            self.input_path = cli_config.input_path;
        }
        // Always use CLI algorithm and thread count
        self.algorithm = cli_config.algorithm;
        self.thread_count = cli_config.thread_count;
        if cli_config.log_level != default_log_level() {
            self.log_level = cli_config.log_level;
        }
        self
    }
}
