use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::assembler;
use crate::error::{Error, Result};
use crate::interface::config::BridgeConfig;
use crate::interface::output::Logger;
use crate::resolver;
use crate::scanner;

/// Batch bridging-header generator.
///
/// Runs in two phases. The generation phase is read-only: every configured
/// target is resolved, scanned and assembled into an in-memory document, and
/// any failure aborts the run before a single byte hits the disk. The write
/// phase only starts once all documents exist; a write failure there stops
/// the run and names the failing target, but files written earlier in the
/// phase stay on disk.
pub struct Generator {
    base_path: PathBuf,
    config: BridgeConfig,
    logger: Logger,
}

impl Generator {
    pub fn new<P: AsRef<Path>>(base_path: P, config: BridgeConfig, logger: Logger) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            config,
            logger,
        }
    }

    /// Generate every configured bridging header.
    ///
    /// Returns the paths of the written files, in target-name order.
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        if self.config.headers.is_empty() {
            return Err(Error::Configuration(
                "no bridging headers configured".to_string(),
            ));
        }

        let output_dir = resolver::resolve(&self.config.output_dir, &self.base_path)?;
        let base_search_path = resolver::resolve(&self.config.base_path, &self.base_path)?;

        self.logger
            .verbose(&format!("Base working path: {}", self.base_path.display()));
        self.logger
            .verbose(&format!("Output directory: {}", output_dir.display()));
        self.logger.verbose(&format!(
            "Base header search directory: {}",
            base_search_path.display()
        ));

        let documents = self.generate_documents(&base_search_path)?;
        self.write_documents(&output_dir, &documents)
    }

    /// Generation phase. Read-only; aborts on the first failing target.
    ///
    /// Targets are processed in name order (the config map is a `BTreeMap`),
    /// so repeated runs visit them in the same sequence.
    fn generate_documents(&self, base_search_path: &Path) -> Result<BTreeMap<String, String>> {
        let mut documents = BTreeMap::new();

        for (name, spec) in &self.config.headers {
            self.logger.verbose(&format!("Generating {}...", name));

            let search_path = resolver::resolve(&spec.path, base_search_path)?;
            self.logger
                .verbose(&format!("Scanning {}", search_path.display()));

            let headers =
                scanner::scan(&search_path, spec.recursive, spec.ignored_names.as_deref())?;
            let content = assembler::assemble(name, spec.framework_name.as_deref(), &headers);
            documents.insert(name.clone(), content);
        }

        Ok(documents)
    }

    /// Write phase. Overwrites existing files; stops at the first failure.
    fn write_documents(
        &self,
        output_dir: &Path,
        documents: &BTreeMap<String, String>,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(documents.len());

        for (name, content) in documents {
            self.logger.verbose(&format!("Writing {}", name));

            let file_path = output_dir.join(name);
            fs::write(&file_path, content).map_err(|source| Error::Write {
                target: name.clone(),
                source,
            })?;
            written.push(file_path);
        }

        Ok(written)
    }
}
