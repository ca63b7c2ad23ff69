//! Configuration for the globe tools.
//!
//! Settings persist to disk as `config.ron`, can be overridden from the
//! command line via clap, and support change detection for hot reload.
//! The mesh generator itself takes no defaults; the subdivision level lives
//! here.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{CONFIG_FILE_NAME, Config, DebugConfig, MeshConfig};
pub use error::ConfigError;
