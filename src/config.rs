//! Configuration handling for Hatch boilerplates.
//! This module loads the metadata file that sits next to a boilerplate's
//! `boilerplate/` directory: the variable schema, symlink declarations,
//! README filters, file renames and ignore patterns.

use crate::constants::{CONFIG_FILES, DEFAULT_README};
use crate::error::{Error, Result};
use crate::parser::Answers;
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Kind of a boilerplate variable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    #[default]
    Text,
    Select,
}

/// Predicate over answers collected so far.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Equals { key: String, value: String },
    NotEquals { key: String, value: String },
    OneOf { key: String, values: Vec<String> },
    Present { key: String },
}

impl Condition {
    /// Evaluates the condition. Keys that were never answered only satisfy `not_equals`.
    pub fn evaluate(&self, answers: &Answers) -> bool {
        match self {
            Condition::Equals { key, value } => answers.get(key) == Some(value),
            Condition::NotEquals { key, value } => answers.get(key) != Some(value),
            Condition::OneOf { key, values } => {
                answers.get(key).is_some_and(|answer| values.contains(answer))
            }
            Condition::Present { key } => answers.contains_key(key),
        }
    }
}

/// A single question declared by a boilerplate.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Variable {
    /// Prompt text, may reference earlier answers
    #[serde(default)]
    pub help: String,
    #[serde(default, rename = "type")]
    pub kind: VariableKind,
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub choices: Vec<String>,
    /// Ask this question only when the condition holds
    #[serde(default)]
    pub when: Option<Condition>,
}

impl Variable {
    /// Index of the declared default among the choices, falling back to the first one.
    pub fn default_choice(&self) -> usize {
        self.default
            .as_ref()
            .and_then(|default| self.choices.iter().position(|choice| choice == default))
            .unwrap_or(0)
    }

    pub fn is_visible(&self, answers: &Answers) -> bool {
        self.when.as_ref().map_or(true, |condition| condition.evaluate(answers))
    }
}

fn default_readme() -> String {
    DEFAULT_README.to_string()
}

/// Parsed boilerplate metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct BoilerplateConfig {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub variables: IndexMap<String, Variable>,
    /// Link path to link target, both relative to the output directory
    #[serde(default)]
    pub symlinks: IndexMap<String, String>,
    /// README section name to the condition that enables it
    #[serde(default)]
    pub filters: IndexMap<String, Condition>,
    #[serde(default)]
    pub rename: IndexMap<String, String>,
    #[serde(default)]
    pub ignore: Vec<String>,
    /// README template file name inside the boilerplate directory
    #[serde(default = "default_readme")]
    pub readme: String,
}

impl Default for BoilerplateConfig {
    fn default() -> Self {
        Self {
            description: None,
            variables: IndexMap::new(),
            symlinks: IndexMap::new(),
            filters: IndexMap::new(),
            rename: IndexMap::new(),
            ignore: Vec::new(),
            readme: default_readme(),
        }
    }
}

/// Reads the first configuration file found in the boilerplate root.
///
/// # Arguments
/// * `template_dir` - Directory containing the boilerplate metadata
///
/// # Errors
/// * `Error::ConfigError` if no configuration file exists
pub fn load_config<P: AsRef<Path>>(template_dir: P) -> Result<String> {
    for file in CONFIG_FILES {
        let config_path = template_dir.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            return Ok(std::fs::read_to_string(&config_path)?);
        }
    }

    Err(Error::ConfigError(format!(
        "No configuration file found in '{}' (tried: {})",
        template_dir.as_ref().display(),
        CONFIG_FILES.join(", ")
    )))
}

/// Parses configuration content, trying JSON first and YAML second.
pub fn parse_config(content: &str) -> Result<BoilerplateConfig> {
    match serde_json::from_str(content) {
        Ok(config) => Ok(config),
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {e}"))),
    }
}

/// Loads and parses the boilerplate metadata.
pub fn get_config<P: AsRef<Path>>(template_dir: P) -> Result<BoilerplateConfig> {
    let content = load_config(template_dir)?;
    parse_config(&content)
}
