//! Project generation flow: resolve the boilerplate, collect answers,
//! materialize the files and compose the README.
use crate::cli::Args;
use crate::constants::{DEFAULT_README, FALLBACK_README};
use crate::error::Result;
use crate::loader::{load_boilerplate, Boilerplate, Registry, TemplateSource};
use crate::parser::{get_answers, Answers};
use crate::processor::{Processed, Processor};
use crate::prompt::InputSource;
use crate::readme::{compose, selected_filters};
use crate::renderer::{TemplateRenderer, TokenRenderer};
use clap::Parser;
use log::debug;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Project directory for the optional project name.
pub fn get_output_dir<P: AsRef<Path>>(cwd: P, name: Option<&str>) -> PathBuf {
    match name {
        Some(name) => cwd.as_ref().join(name),
        None => cwd.as_ref().to_path_buf(),
    }
}

/// Values every boilerplate can reference without declaring them.
pub fn builtin_context(output_dir: &Path) -> Answers {
    let name = output_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Answers::from([("name".to_string(), name)])
}

/// Renders the boilerplate's README template, or a minimal one, into `README.md`.
pub fn compose_readme(
    engine: &dyn TemplateRenderer,
    boilerplate: &Boilerplate,
    processor: &Processor<'_>,
    answers: &Answers,
) -> Result<Processed> {
    let template_path = boilerplate.content_dir.join(&boilerplate.config.readme);
    let template = if template_path.is_file() {
        fs::read_to_string(&template_path)?
    } else {
        debug!("No README template at {}, using the fallback", template_path.display());
        FALLBACK_README.to_string()
    };

    let selected = selected_filters(&boilerplate.config.filters, answers);
    debug!("README filters: {selected:?}");
    let content = compose(engine, &template, answers, &selected);
    processor.write(DEFAULT_README, content.as_bytes())
}

/// Generates a project from parsed arguments and returns its directory.
///
/// # Flow
/// 1. Resolves the boilerplate (may ask which one to use)
/// 2. Collects answers for the boilerplate variables
/// 3. Writes the rendered files, directories and symlinks
/// 4. Writes README.md
pub fn execute<P: AsRef<Path>>(cwd: P, args: &Args, input: &mut dyn InputSource) -> Result<PathBuf> {
    let engine = TokenRenderer::new();
    let output_dir = get_output_dir(cwd, args.name.as_deref());

    let source =
        TemplateSource::from_args(args.template.as_deref(), args.boilerplate_type.as_deref());
    let registry = match source {
        TemplateSource::FileSystem(_) => Registry::default(),
        _ => Registry::load(args.registry.as_deref())?,
    };
    let boilerplate = load_boilerplate(source, &registry, &engine, input, args.silent)?;

    let mut answers = builtin_context(&output_dir);
    let collected =
        get_answers(&engine, input, &boilerplate.config.variables, &answers, args.silent)?;
    answers.extend(collected);
    debug!("Answers: {answers:?}");

    let processor = Processor::new(&engine, &boilerplate, &output_dir, &answers, args.force)?;
    let mut processed = processor.materialize()?;
    processed.push(compose_readme(&engine, &boilerplate, &processor, &answers)?);

    for result in &processed {
        println!("{}: '{}'", result.action, result.target.display());
    }
    println!("Project created in '{}'.", output_dir.display());
    Ok(output_dir)
}

/// Parses CLI style tokens (without the program name) and generates the project.
pub fn run<P, I, T>(cwd: P, args: I, input: &mut dyn InputSource) -> Result<PathBuf>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv = std::iter::once(OsString::from("hatch")).chain(args.into_iter().map(Into::into));
    let args = Args::try_parse_from(argv)?;
    execute(cwd, &args, input)
}
