//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Globe command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "globe", about = "Cube-sphere mesh generator")]
pub struct CliArgs {
    /// Subdivisions per cube edge.
    #[arg(long)]
    pub divs: Option<u32>,

    /// Run topology validation after generation.
    #[arg(long)]
    pub validate: Option<bool>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(divs) = args.divs {
            self.mesh.divs = divs;
        }
        if let Some(validate) = args.validate {
            self.mesh.validate = validate;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
