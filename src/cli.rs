//! Command-line interface implementation for Hatch.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for Hatch.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Hatch: create projects from boilerplates", long_about = None)]
pub struct Args {
    /// Project directory to create, relative to the current directory
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Path to a local boilerplate directory, takes priority over --type
    #[arg(long, value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// Boilerplate type to look up in the registry
    #[arg(long = "type", value_name = "TYPE")]
    pub boilerplate_type: Option<String>,

    /// Registry file mapping boilerplate types to directories
    #[arg(long, value_name = "PATH", env = "HATCH_REGISTRY")]
    pub registry: Option<PathBuf>,

    /// Overwrite files that already exist in the project directory
    #[arg(short, long)]
    pub force: bool,

    /// Use default answers for every question without prompting
    #[arg(short, long)]
    pub silent: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
