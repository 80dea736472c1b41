//! Token substitution for file contents and path segments.
//!
//! Tokens look like `{{ name }}` (whitespace inside the braces is optional).
//! A token whose identifier is not a known answer is left untouched, and a
//! token written as `\{{ name }}` is emitted literally without the backslash.
use crate::parser::Answers;
use regex::{Captures, Regex};
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\\)?\{\{\s*([A-Za-z_][A-Za-z0-9_.\-]*)\s*\}\}").expect("token pattern is valid")
});

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given answers.
    ///
    /// Rendering never fails: unresolved tokens stay in the output as they were.
    fn render(&self, template: &str, answers: &Answers) -> String;

    /// Renders every component of a relative path independently.
    fn render_path(&self, path: &Path, answers: &Answers) -> PathBuf {
        path.components()
            .map(|component| match component {
                Component::Normal(segment) => {
                    PathBuf::from(self.render(&segment.to_string_lossy(), answers))
                }
                other => PathBuf::from(other.as_os_str()),
            })
            .collect()
    }
}

/// Single pass `{{ name }}` substitution engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenRenderer;

impl TokenRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for TokenRenderer {
    fn render(&self, template: &str, answers: &Answers) -> String {
        TOKEN
            .replace_all(template, |caps: &Captures| {
                let token = &caps[0];
                if caps.get(1).is_some() {
                    return token[1..].to_string();
                }
                match answers.get(&caps[2]) {
                    Some(value) => value.clone(),
                    None => token.to_string(),
                }
            })
            .into_owned()
    }
}
