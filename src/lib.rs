//! # bridgegen
//!
//! Keeps aggregate bridging headers in sync with the header files actually
//! present in a source tree.
//!
//! Given a declarative configuration naming one or more bridging headers,
//! bridgegen scans the configured directories for `.h` files, filters them by
//! name, and rewrites one generated header per target whose sole content is a
//! list of `#import` directives — framework-qualified or locally quoted.
//!
//! ## Features
//!
//! - **Automatic discovery**: scans a directory (optionally recursively) for
//!   `.h` files, matching the extension case-insensitively
//! - **Name filtering**: excludes headers whose filename matches a per-target
//!   regular expression
//! - **Framework imports**: emits `#import <Framework/Header.h>` when a
//!   target declares a framework name, `#import "Header.h"` otherwise
//! - **All-or-nothing generation**: every target is assembled in memory
//!   first; nothing is written unless all targets succeed
//! - **Reproducible output**: imports are emitted in lexicographic order, so
//!   repeated runs over an unchanged tree produce byte-identical files
//!
//! ## Quick start
//!
//! ```bash
//! # Write a starter bridgegen.json
//! bridgegen init
//!
//! # Regenerate every configured bridging header
//! bridgegen generate
//! ```
//!
//! ## Programmatic usage
//!
//! ```rust,no_run
//! use bridgegen::{generate_from_config, BridgeConfig, HeaderSpec};
//!
//! let mut config = BridgeConfig::default();
//! config.output_dir = "Sources/App".to_string();
//! config.headers.insert(
//!     "App-Bridging-Header.h".to_string(),
//!     HeaderSpec {
//!         path: "Sources/App".to_string(),
//!         recursive: true,
//!         ignored_names: Some("Private".to_string()),
//!         framework_name: None,
//!     },
//! );
//!
//! let written = generate_from_config(".", &config)?;
//! # Ok::<(), bridgegen::Error>(())
//! ```
//!
//! ## Configuration
//!
//! `bridgegen.json`, discovered by walking up from the working directory:
//!
//! ```json
//! {
//!   "outputDir": "Sources/App",
//!   "basePath": "Sources",
//!   "headers": {
//!     "App-Bridging-Header.h": {
//!       "path": "App",
//!       "recursive": true,
//!       "ignoredNames": "Private",
//!       "frameworkName": "App"
//!     }
//!   }
//! }
//! ```

pub mod assembler;
mod error;
pub mod generator;
pub mod interface;
pub mod resolver;
pub mod scanner;

pub use error::{Error, Result};
pub use generator::Generator;

// Convenience re-exports for common use cases
pub use interface::config::{discover_config, BridgeConfig, ConfigError, HeaderSpec};
pub use interface::generate_from_config;
pub use interface::output::{Logger, ProgressReporter};
