//! Error handling for the Hatch application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for Hatch operations.
///
/// This enum represents all possible errors that can occur while a project
/// is being generated. It implements the standard Error trait through
/// thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur while walking the boilerplate tree
    #[error("Walk error: {0}.")]
    WalkError(#[from] walkdir::Error),

    /// Represents invalid ignore patterns declared by a boilerplate
    #[error("Ignore pattern error: {0}.")]
    GlobError(#[from] globset::Error),

    /// Represents command line parsing failures
    #[error("{0}")]
    CliError(#[from] clap::Error),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// The requested boilerplate directory is missing
    #[error("Template directory does not exist: {template_dir}.")]
    TemplateDoesNotExist { template_dir: String },

    /// A boilerplate name or type matches nothing the registry knows about
    #[error("Boilerplate not found: {name}.")]
    NotFound { name: String },

    /// A rendered target path already exists and the run is not forced
    #[error("'{path}' already exists, use --force to overwrite it.")]
    Conflict { path: String },

    /// A single boilerplate entry could not be turned into an output path
    #[error("Failed to process '{source_path}': {e}.")]
    ProcessError { source_path: String, e: String },

    /// A scripted input queue ran dry before every question was answered
    #[error("Input exhausted before all questions were answered.")]
    InputExhausted,

    /// Represents errors that occur during user interaction
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
