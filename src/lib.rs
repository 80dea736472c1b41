//! Hatch creates new projects from boilerplates.
//! It resolves the boilerplate to use, asks for the variables the boilerplate
//! declares, and writes the rendered files, symlinks and README into the
//! project directory.

/// Command-line interface module for the Hatch application
pub mod cli;

/// Orchestration of a whole project generation run
pub mod command;

/// Boilerplate metadata: variables, symlinks, README filters
/// Supports JSON and YAML formats (hatch.json, hatch.yml, hatch.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for the Hatch application
pub mod error;

/// Ignore patterns for boilerplate entries
pub mod ignore;

/// Boilerplate resolution from paths, types and the registry
pub mod loader;

/// Logger setup
pub mod logger;

/// Question sequencing and answer collection
pub mod parser;

/// Writing the rendered boilerplate tree
pub mod processor;

/// Input sources for answering questions
pub mod prompt;

/// README composition with optional sections
pub mod readme;

/// `{{ name }}` token substitution
pub mod renderer;
