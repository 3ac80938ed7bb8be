use clap::Parser;
use std::path::PathBuf;

use bridgegen::interface::cli::{Cli, Commands};
use bridgegen::interface::config::{discover_config, BridgeConfig, HeaderSpec};
use bridgegen::{Generator, Logger, ProgressReporter};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            config_file,
            base_path,
            verbose,
        } => run_generate(config_file, base_path, verbose),
        Commands::Init { output_path, force } => run_init(output_path, force),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(
    config_file: Option<PathBuf>,
    base_path: PathBuf,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let logger = Logger::new(verbose);
    let mut reporter = ProgressReporter::new(logger.clone(), 2);

    reporter.start_step("Loading configuration");
    let config_path = match config_file {
        Some(path) => path,
        None => discover_config(&base_path)
            .ok_or("No bridgegen.json found. Run `bridgegen init` to create one.")?,
    };
    let config = BridgeConfig::from_file(&config_path)?;
    reporter.complete_step(Some(&format!("Using {}", config_path.display())));

    reporter.start_step("Generating bridging headers");
    let generator = Generator::new(&base_path, config, logger);
    let written = match generator.run() {
        Ok(written) => written,
        Err(e) => {
            reporter.fail_step("no files have been changed");
            return Err(e.into());
        }
    };
    reporter.complete_step(None);

    reporter.finish(&format!(
        "Generated {} bridging header{}",
        written.len(),
        if written.len() == 1 { "" } else { "s" }
    ));
    for file in &written {
        println!("  {}", file.display());
    }

    Ok(())
}

fn run_init(output_path: PathBuf, force: bool) -> Result<(), Box<dyn std::error::Error>> {
    if output_path.exists() && !force {
        return Err(format!(
            "{} already exists. Use --force to overwrite it.",
            output_path.display()
        )
        .into());
    }

    let mut config = BridgeConfig {
        output_dir: "Sources/App".to_string(),
        base_path: "Sources".to_string(),
        ..Default::default()
    };
    config.headers.insert(
        "App-Bridging-Header.h".to_string(),
        HeaderSpec {
            path: "App".to_string(),
            recursive: true,
            ignored_names: Some("Private".to_string()),
            framework_name: None,
        },
    );
    config.save_to_file(&output_path)?;

    println!("✓ Wrote {}", output_path.display());
    println!("Edit the header entries, then run `bridgegen generate`.");

    Ok(())
}
