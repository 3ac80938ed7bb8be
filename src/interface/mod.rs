pub mod cli;
pub mod config;
pub mod output;

use std::path::{Path, PathBuf};

use crate::generator::Generator;

pub use cli::*;
pub use config::*;
pub use output::*;

/// Generate every bridging header described by `config`, resolving relative
/// paths against `base_path`. Convenience wrapper for programmatic use; the
/// CLI builds its own `Generator` so it can share a verbose logger.
pub fn generate_from_config<P: AsRef<Path>>(
    base_path: P,
    config: &BridgeConfig,
) -> crate::Result<Vec<PathBuf>> {
    let generator = Generator::new(base_path, config.clone(), Logger::new(false));
    generator.run()
}
