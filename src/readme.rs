//! README composition.
//!
//! A README template mixes plain tokens with optional sections:
//!
//! ```text
//! <!-- filter: filter-test -->
//! ## Testing
//! <!-- endfilter -->
//! ```
//!
//! A section is kept when its filter is selected and removed, markers
//! included, when it is not.
use crate::config::Condition;
use crate::parser::Answers;
use crate::renderer::TemplateRenderer;
use indexmap::IndexMap;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--\s*filter:\s*([A-Za-z0-9_.\-]+)\s*-->\r?\n?(.*?)<!--\s*endfilter\s*-->\r?\n?")
        .expect("section pattern is valid")
});

/// Names of the filters whose condition holds for the given answers.
pub fn selected_filters(filters: &IndexMap<String, Condition>, answers: &Answers) -> Vec<String> {
    filters
        .iter()
        .filter(|(_, condition)| condition.evaluate(answers))
        .map(|(name, _)| name.clone())
        .collect()
}

/// Builds the README text from its template.
pub fn compose<S: AsRef<str>>(
    engine: &dyn TemplateRenderer,
    template: &str,
    answers: &Answers,
    selected: &[S],
) -> String {
    let filtered = SECTION.replace_all(template, |caps: &Captures| {
        if selected.iter().any(|name| name.as_ref() == &caps[1]) {
            caps[2].to_string()
        } else {
            String::new()
        }
    });
    engine.render(&filtered, answers)
}
