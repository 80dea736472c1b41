//! Boilerplate resolution.
//! Works out which boilerplate directory a run uses: an explicit local path,
//! a named type looked up in the registry, or a choice among registry
//! candidates when nothing more specific was given.
use crate::config::{get_config, BoilerplateConfig, Variable, VariableKind};
use crate::constants::CONTENT_DIR;
use crate::error::{Error, Result};
use crate::parser::{get_answers, Answers};
use crate::prompt::InputSource;
use crate::renderer::TemplateRenderer;
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Represents the way a boilerplate was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Local filesystem boilerplate path
    FileSystem(PathBuf),
    /// Named type from the registry
    Type(String),
    /// Nothing specific, pick among registry entries
    Candidates,
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::FileSystem(path) => {
                write!(f, "local path: '{}'", path.display())
            }
            TemplateSource::Type(name) => write!(f, "boilerplate type: '{name}'"),
            TemplateSource::Candidates => write!(f, "registry"),
        }
    }
}

impl TemplateSource {
    /// Builds the source from the `--template` and `--type` flags. The path wins.
    pub fn from_args(template: Option<&Path>, boilerplate_type: Option<&str>) -> Self {
        match (template, boilerplate_type) {
            (Some(path), _) => Self::FileSystem(path.to_path_buf()),
            (None, Some(name)) => Self::Type(name.to_string()),
            (None, None) => Self::Candidates,
        }
    }
}

/// A registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistryEntry {
    pub path: PathBuf,
    #[serde(default)]
    pub description: Option<String>,
}

/// Ordered table of known boilerplates, name to local directory.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: IndexMap<String, RegistryEntry>,
}

impl Registry {
    pub fn new(entries: IndexMap<String, RegistryEntry>) -> Self {
        Self { entries }
    }

    /// Reads a JSON or YAML registry file. Relative paths are resolved against its directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading registry from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let mut entries: IndexMap<String, RegistryEntry> = match serde_json::from_str(&content) {
            Ok(entries) => entries,
            Err(_) => serde_yaml::from_str(&content)
                .map_err(|e| Error::ConfigError(format!("Invalid registry format: {e}")))?,
        };

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for entry in entries.values_mut() {
            if entry.path.is_relative() {
                entry.path = base.join(&entry.path);
            }
        }
        Ok(Self { entries })
    }

    /// Loads the registry file if one is configured, otherwise an empty registry.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.entries.get(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Trait for loading boilerplates from different sources.
pub trait TemplateLoader {
    /// Returns the local directory of the boilerplate.
    fn load(&self) -> Result<PathBuf>;
}

/// Loader for boilerplates from the local filesystem.
pub struct LocalLoader<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> LocalLoader<P> {
    pub fn new(path: P) -> Self {
        Self { path }
    }
}

impl<P: AsRef<Path>> TemplateLoader for LocalLoader<P> {
    /// # Errors
    /// * `Error::TemplateDoesNotExist` if the path doesn't exist
    fn load(&self) -> Result<PathBuf> {
        let path = self.path.as_ref();
        if !path.is_dir() {
            return Err(Error::TemplateDoesNotExist {
                template_dir: path.display().to_string(),
            });
        }
        Ok(path.to_path_buf())
    }
}

/// Loader for named boilerplate types.
pub struct RegistryLoader<'a> {
    registry: &'a Registry,
    name: String,
}

impl<'a> RegistryLoader<'a> {
    pub fn new<S: Into<String>>(registry: &'a Registry, name: S) -> Self {
        Self { registry, name: name.into() }
    }
}

impl TemplateLoader for RegistryLoader<'_> {
    fn load(&self) -> Result<PathBuf> {
        let entry = self
            .registry
            .get(&self.name)
            .ok_or_else(|| Error::NotFound { name: self.name.clone() })?;
        LocalLoader::new(&entry.path).load()
    }
}

/// A resolved boilerplate: its directory and metadata.
#[derive(Debug, Clone)]
pub struct Boilerplate {
    pub root: PathBuf,
    pub content_dir: PathBuf,
    pub config: BoilerplateConfig,
}

impl Boilerplate {
    /// Reads the metadata of a boilerplate directory.
    pub fn open<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        let content_dir = root.join(CONTENT_DIR);
        if !content_dir.is_dir() {
            return Err(Error::TemplateDoesNotExist {
                template_dir: content_dir.display().to_string(),
            });
        }
        let config = get_config(&root)?;
        Ok(Self { root, content_dir, config })
    }
}

/// Asks which registry candidate to use, the first one being the default.
pub fn choose_candidate(
    engine: &dyn TemplateRenderer,
    input: &mut dyn InputSource,
    candidates: Vec<String>,
    silent: bool,
) -> Result<String> {
    let mut schema = IndexMap::new();
    schema.insert(
        "type".to_string(),
        Variable {
            help: "Select a boilerplate".to_string(),
            kind: VariableKind::Select,
            default: candidates.first().cloned(),
            choices: candidates,
            when: None,
        },
    );

    let mut answers = get_answers(engine, input, &schema, &Answers::new(), silent)?;
    answers
        .shift_remove("type")
        .ok_or_else(|| Error::PromptError("no boilerplate selected".to_string()))
}

/// Returns the boilerplate for the given source.
///
/// Fails before anything is written when a type or candidate matches nothing.
pub fn load_boilerplate(
    source: TemplateSource,
    registry: &Registry,
    engine: &dyn TemplateRenderer,
    input: &mut dyn InputSource,
    silent: bool,
) -> Result<Boilerplate> {
    debug!("Using boilerplate from the {source}");

    let loader: Box<dyn TemplateLoader + '_> = match source {
        TemplateSource::FileSystem(path) => Box::new(LocalLoader::new(path)),
        TemplateSource::Type(name) => Box::new(RegistryLoader::new(registry, name)),
        TemplateSource::Candidates => {
            let candidates = registry.names();
            let name = match candidates.len() {
                0 => {
                    return Err(Error::NotFound {
                        name: "no boilerplate given and the registry is empty".to_string(),
                    })
                }
                1 => candidates[0].clone(),
                _ => choose_candidate(engine, input, candidates, silent)?,
            };
            debug!("Selected boilerplate '{name}'");
            Box::new(RegistryLoader::new(registry, name))
        }
    };

    Boilerplate::open(loader.load()?)
}
