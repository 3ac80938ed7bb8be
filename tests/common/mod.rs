#![allow(dead_code)]
/// Common test utilities and helpers
use std::fs;
use std::path::Path;

use bridgegen::{BridgeConfig, HeaderSpec};
use tempfile::TempDir;

/// A scratch project tree for generation tests.
pub struct TestTree {
    pub temp_dir: TempDir,
}

impl TestTree {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create an empty file, creating parent directories as needed
    pub fn touch(&self, name: &str) -> &Self {
        let file_path = self.temp_dir.path().join(name);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(file_path, "").unwrap();
        self
    }

    /// Create a directory
    pub fn mkdir(&self, name: &str) -> &Self {
        fs::create_dir_all(self.temp_dir.path().join(name)).unwrap();
        self
    }

    /// Get the tree root
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Read a file relative to the tree root
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.temp_dir.path().join(name)).unwrap()
    }

    /// Check whether a file exists relative to the tree root
    pub fn exists(&self, name: &str) -> bool {
        self.temp_dir.path().join(name).exists()
    }
}

/// Build a config with a single header target writing into `out/`
pub fn single_target(name: &str, spec: HeaderSpec) -> BridgeConfig {
    let mut config = BridgeConfig {
        output_dir: "out".to_string(),
        ..Default::default()
    };
    config.headers.insert(name.to_string(), spec);
    config
}
