use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config filename looked up by [`discover_config`].
pub const CONFIG_FILE_NAME: &str = "bridgegen.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// One named bridging header to generate.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HeaderSpec {
    /// Directory to scan for headers, relative to the base search path
    pub path: String,

    /// Descend into subdirectories while scanning
    #[serde(default)]
    pub recursive: bool,

    /// Regular expression excluding any header whose filename matches it
    #[serde(default)]
    pub ignored_names: Option<String>,

    /// Emit `#import <Framework/Header.h>` instead of `#import "Header.h"`
    #[serde(default)]
    pub framework_name: Option<String>,
}

impl HeaderSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            recursive: false,
            ignored_names: None,
            framework_name: None,
        }
    }
}

/// Declarative description of every bridging header to keep in sync.
///
/// Relative paths in the document are resolved against the base path the
/// generator is constructed with, not against the config file's location.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BridgeConfig {
    /// Directory generated files are written to
    #[serde(default = "default_dir")]
    pub output_dir: String,

    /// Root against which per-header search paths are resolved
    #[serde(default = "default_dir")]
    pub base_path: String,

    /// Bridging headers to generate, keyed by output filename
    #[serde(default)]
    pub headers: BTreeMap<String, HeaderSpec>,
}

fn default_dir() -> String {
    ".".to_string()
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            output_dir: default_dir(),
            base_path: default_dir(),
            headers: BTreeMap::new(),
        }
    }
}

impl BridgeConfig {
    /// Load and validate a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration.
    ///
    /// Path existence is deliberately not checked here; the generator probes
    /// the filesystem when it resolves paths at generation time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_dir.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "outputDir must not be empty".to_string(),
            ));
        }
        if self.base_path.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "basePath must not be empty".to_string(),
            ));
        }
        if self.headers.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "at least one bridging header must be configured".to_string(),
            ));
        }
        Ok(())
    }
}

/// Walk up the directory tree from `start_dir` looking for a `bridgegen.json`.
///
/// Returns the path of the first one found, nearest directory first.
/// `start_dir` is canonicalized so relative starting points such as `.`
/// still walk all the way to the filesystem root.
pub fn discover_config<P: AsRef<Path>>(start_dir: P) -> Option<PathBuf> {
    let mut current = fs::canonicalize(start_dir).ok()?;

    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        if !current.pop() {
            return None;
        }
    }
}
