//! Materialization of a boilerplate into the output directory.
//! Every entry of the boilerplate tree gets its path rendered, text files get
//! their content rendered, and declared symlinks are created at the end.
//!
//! Writes happen one entry at a time. The first conflict aborts the run and
//! whatever was written before it stays on disk.
use crate::constants::DEFAULT_RENAMES;
use crate::error::{Error, Result};
use crate::ignore::build_ignore_set;
use crate::loader::Boilerplate;
use crate::parser::Answers;
use crate::renderer::TemplateRenderer;
use globset::GlobSet;
use indexmap::IndexMap;
use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// What happened to a target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Created,
    Overwritten,
    Linked,
}

impl std::fmt::Display for FileAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileAction::Created => write!(f, "Created"),
            FileAction::Overwritten => write!(f, "Overwritten"),
            FileAction::Linked => write!(f, "Linked"),
        }
    }
}

/// A single written item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processed {
    pub action: FileAction,
    pub target: PathBuf,
}

/// Text is anything that decodes as UTF-8 and has no NUL bytes.
pub fn is_text(content: &[u8]) -> bool {
    !content.contains(&0) && std::str::from_utf8(content).is_ok()
}

/// A rendered segment is usable when it is a single plain path component.
pub fn is_rendered_segment_valid(segment: &str) -> bool {
    let mut components = Path::new(segment).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !segment.contains('/')
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    let resolved = link.parent().map(|parent| parent.join(target)).unwrap_or_default();
    if resolved.is_dir() {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}

pub struct Processor<'a> {
    engine: &'a dyn TemplateRenderer,
    boilerplate: &'a Boilerplate,
    output_root: &'a Path,
    answers: &'a Answers,
    ignored: GlobSet,
    renames: IndexMap<String, String>,
    force: bool,
}

impl<'a> Processor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        boilerplate: &'a Boilerplate,
        output_root: &'a Path,
        answers: &'a Answers,
        force: bool,
    ) -> Result<Self> {
        let ignored = build_ignore_set(&boilerplate.config.ignore)?;
        let mut renames: IndexMap<String, String> = DEFAULT_RENAMES
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect();
        renames.extend(boilerplate.config.rename.clone());

        Ok(Self { engine, boilerplate, output_root, answers, ignored, renames, force })
    }

    /// Renders a path relative to the boilerplate directory into an output path.
    ///
    /// Each segment is rendered on its own and must stay a single plain
    /// component. The file name of a non-directory goes through the rename table.
    pub fn resolve_target_path(&self, relative: &Path, is_dir: bool) -> Result<PathBuf> {
        let mut rendered = PathBuf::new();
        let mut segments = relative.components().peekable();

        while let Some(component) = segments.next() {
            let invalid = || Error::ProcessError {
                source_path: relative.display().to_string(),
                e: "rendered path is not a plain relative path".to_string(),
            };
            let Component::Normal(segment) = component else {
                return Err(invalid());
            };
            let mut segment = self.engine.render(&segment.to_string_lossy(), self.answers);
            if !is_rendered_segment_valid(&segment) {
                return Err(invalid());
            }
            if segments.peek().is_none() && !is_dir {
                if let Some(renamed) = self.renames.get(&segment) {
                    segment = renamed.clone();
                }
            }
            rendered.push(segment);
        }

        if rendered.as_os_str().is_empty() {
            return Err(Error::ProcessError {
                source_path: relative.display().to_string(),
                e: "rendered path is empty".to_string(),
            });
        }
        Ok(self.output_root.join(rendered))
    }

    /// Checks a target before writing it. Existing entries are a conflict unless forced.
    fn prepare_target(&self, target: &Path) -> Result<FileAction> {
        match fs::symlink_metadata(target) {
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(FileAction::Created),
            Err(e) => Err(e.into()),
            Ok(_) if !self.force => Err(Error::Conflict { path: target.display().to_string() }),
            Ok(metadata) if metadata.is_dir() => {
                debug!("Replacing directory {}", target.display());
                fs::remove_dir_all(target)?;
                Ok(FileAction::Overwritten)
            }
            Ok(_) => {
                debug!("Replacing {}", target.display());
                fs::remove_file(target)?;
                Ok(FileAction::Overwritten)
            }
        }
    }

    fn ensure_parent(target: &Path) -> Result<()> {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Writes content to a path relative to the output root.
    pub fn write<P: AsRef<Path>>(&self, relative: P, content: &[u8]) -> Result<Processed> {
        let target = self.output_root.join(relative);
        let action = self.prepare_target(&target)?;
        Self::ensure_parent(&target)?;
        fs::write(&target, content)?;
        Ok(Processed { action, target })
    }

    fn process_file(&self, source: &Path, target: PathBuf) -> Result<Processed> {
        let content = fs::read(source)?;
        let permissions = fs::metadata(source)?.permissions();

        let action = self.prepare_target(&target)?;
        Self::ensure_parent(&target)?;
        if is_text(&content) {
            let content = String::from_utf8_lossy(&content);
            fs::write(&target, self.engine.render(&content, self.answers))?;
        } else {
            debug!("Copying binary file {}", source.display());
            fs::write(&target, &content)?;
        }
        fs::set_permissions(&target, permissions)?;

        Ok(Processed { action, target })
    }

    /// Creates a symlink at `link` pointing at `target`, both already rendered.
    fn process_link(&self, target: &Path, link: PathBuf) -> Result<Processed> {
        self.prepare_target(&link)?;
        Self::ensure_parent(&link)?;
        create_symlink(target, &link)?;
        Ok(Processed { action: FileAction::Linked, target: link })
    }

    fn is_ignored(&self, path: &Path) -> bool {
        path.strip_prefix(&self.boilerplate.content_dir)
            .is_ok_and(|relative| self.ignored.is_match(relative))
    }

    /// Processes one entry of the boilerplate tree.
    ///
    /// Returns `None` for ignored entries and directories that already exist.
    pub fn process(&self, entry: &DirEntry) -> Result<Option<Processed>> {
        let content_dir = &self.boilerplate.content_dir;
        let relative = entry.path().strip_prefix(content_dir).map_err(|e| Error::ProcessError {
            source_path: entry.path().display().to_string(),
            e: e.to_string(),
        })?;

        if self.is_ignored(entry.path()) {
            debug!("Skipping ignored {}", relative.display());
            return Ok(None);
        }
        if relative == Path::new(&self.boilerplate.config.readme) {
            debug!("Leaving {} to the README composer", relative.display());
            return Ok(None);
        }

        let file_type = entry.file_type();
        let target = self.resolve_target_path(relative, file_type.is_dir())?;

        if file_type.is_dir() {
            if target.is_dir() {
                return Ok(None);
            }
            fs::create_dir_all(&target)?;
            Ok(Some(Processed { action: FileAction::Created, target }))
        } else if file_type.is_symlink() {
            let link_target = fs::read_link(entry.path())?;
            let link_target = self.engine.render_path(&link_target, self.answers);
            self.process_link(&link_target, target).map(Some)
        } else {
            self.process_file(entry.path(), target).map(Some)
        }
    }

    /// Creates the symlinks declared in the boilerplate metadata.
    pub fn process_declared_links(&self) -> Result<Vec<Processed>> {
        let mut processed = Vec::new();
        for (link, target) in &self.boilerplate.config.symlinks {
            let link = self.resolve_target_path(Path::new(link), true)?;
            let target = self.engine.render_path(Path::new(target), self.answers);
            processed.push(self.process_link(&target, link)?);
        }
        Ok(processed)
    }

    /// Walks the boilerplate depth first, parents before children, and writes every entry.
    pub fn materialize(&self) -> Result<Vec<Processed>> {
        let mut processed = Vec::new();
        let walker = WalkDir::new(&self.boilerplate.content_dir)
            .min_depth(1)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_ignored(entry.path()));

        for entry in walker {
            let entry = entry?;
            match self.process(&entry) {
                Ok(Some(result)) => {
                    debug!("{}: '{}'", result.action, result.target.display());
                    processed.push(result);
                }
                Ok(None) => {}
                Err(e @ Error::ProcessError { .. }) => warn!("{e}"),
                Err(e) => return Err(e),
            }
        }

        for result in self.process_declared_links()? {
            debug!("{}: '{}'", result.action, result.target.display());
            processed.push(result);
        }

        Ok(processed)
    }
}
