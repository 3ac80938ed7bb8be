use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bridgegen", version)]
#[command(about = "Keeps bridging headers in sync with the header files on disk")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate every bridging header described by the configuration
    Generate {
        /// Configuration file (default: nearest bridgegen.json)
        #[arg(short = 'c', long = "config")]
        config_file: Option<PathBuf>,

        /// Base directory relative configuration paths are resolved against
        #[arg(short = 'b', long = "base-path", default_value = ".")]
        base_path: PathBuf,

        /// Verbose output
        #[arg(long, action = clap::ArgAction::SetTrue)]
        verbose: bool,
    },
    /// Write a starter configuration file
    Init {
        /// Where to write the configuration
        #[arg(short = 'o', long = "output", default_value = "bridgegen.json")]
        output_path: PathBuf,

        /// Overwrite an existing configuration
        #[arg(long, action = clap::ArgAction::SetTrue)]
        force: bool,
    },
}
