//! Question sequencing: turns a boilerplate's variable schema into answers.
use crate::config::{Variable, VariableKind};
use crate::error::{Error, Result};
use crate::prompt::{InputEvent, InputSource};
use crate::renderer::TemplateRenderer;
use indexmap::IndexMap;
use log::{debug, warn};

/// Resolved answers in schema order.
pub type Answers = IndexMap<String, String>;

/// How a single question gets its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionState {
    /// Visibility condition is false, the key stays absent
    Skipped,
    /// Default is taken without reading any input
    Auto,
    /// The input source is consulted
    Asked,
}

pub fn question_state(variable: &Variable, scope: &Answers, silent: bool) -> QuestionState {
    if !variable.is_visible(scope) {
        QuestionState::Skipped
    } else if silent || (variable.kind == VariableKind::Select && variable.choices.len() == 1) {
        QuestionState::Auto
    } else {
        QuestionState::Asked
    }
}

/// Default of a text question, rendered against the answers so far.
/// Without a declared default the value already in scope for the same key is used.
pub fn get_text_default(
    key: &str,
    variable: &Variable,
    scope: &Answers,
    engine: &dyn TemplateRenderer,
) -> String {
    match &variable.default {
        Some(default) => engine.render(default, scope),
        None => scope.get(key).cloned().unwrap_or_default(),
    }
}

fn prompt_text(
    key: &str,
    variable: &Variable,
    scope: &Answers,
    engine: &dyn TemplateRenderer,
) -> String {
    if variable.help.is_empty() {
        key.to_string()
    } else {
        engine.render(&variable.help, scope)
    }
}

/// Matches a typed answer to a choice, either by name or by 1-based index.
pub fn parse_choice(input: &str, choices: &[String]) -> Option<usize> {
    let input = input.trim();
    if let Some(index) = choices.iter().position(|choice| choice == input) {
        return Some(index);
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=choices.len()).contains(&n) => Some(n - 1),
        _ => None,
    }
}

fn ask_text(input: &mut dyn InputSource, prompt: &str, default: &str) -> Result<String> {
    loop {
        match input.read_line(prompt, default)? {
            InputEvent::Line(line) if line.trim().is_empty() => return Ok(default.to_string()),
            InputEvent::Line(line) => return Ok(line.trim().to_string()),
            InputEvent::Confirm => return Ok(default.to_string()),
            InputEvent::Up | InputEvent::Down => {
                debug!("Ignoring navigation key on a text question");
            }
        }
    }
}

/// Runs a select step. The cursor starts at the first choice and wraps around.
pub fn ask_select(input: &mut dyn InputSource, prompt: &str, choices: &[String]) -> Result<usize> {
    let total = choices.len();
    let mut cursor = 0;
    loop {
        match input.read_key(prompt, choices, cursor)? {
            InputEvent::Up => cursor = (cursor + total - 1) % total,
            InputEvent::Down => cursor = (cursor + 1) % total,
            InputEvent::Confirm => return Ok(cursor),
            InputEvent::Line(line) if line.trim().is_empty() => return Ok(cursor),
            InputEvent::Line(line) => match parse_choice(&line, choices) {
                Some(index) => return Ok(index),
                None => warn!("'{}' is not one of the choices, try again", line.trim()),
            },
        }
    }
}

/// Collects answers for every visible variable.
///
/// # Arguments
/// * `engine` - Renderer used for defaults and prompt texts
/// * `input` - Where answers come from when a question is asked
/// * `variables` - Schema in declaration order
/// * `context` - Built-in values visible to conditions and defaults, not part of the result
/// * `silent` - Take every default without consulting `input`
pub fn get_answers(
    engine: &dyn TemplateRenderer,
    input: &mut dyn InputSource,
    variables: &IndexMap<String, Variable>,
    context: &Answers,
    silent: bool,
) -> Result<Answers> {
    let mut answers = Answers::new();
    let mut scope = context.clone();

    for (key, variable) in variables {
        let state = question_state(variable, &scope, silent);
        debug!("Question '{key}' is {state:?}");

        let value = match (state, variable.kind) {
            (QuestionState::Skipped, _) => continue,
            (_, VariableKind::Select) if variable.choices.is_empty() => {
                return Err(Error::ConfigError(format!("'{key}' is a select without choices")));
            }
            (QuestionState::Auto, VariableKind::Select) => {
                variable.choices[variable.default_choice()].clone()
            }
            (QuestionState::Auto, VariableKind::Text) => {
                get_text_default(key, variable, &scope, engine)
            }
            (QuestionState::Asked, VariableKind::Select) => {
                let prompt = prompt_text(key, variable, &scope, engine);
                let index = ask_select(input, &prompt, &variable.choices)?;
                variable.choices[index].clone()
            }
            (QuestionState::Asked, VariableKind::Text) => {
                let prompt = prompt_text(key, variable, &scope, engine);
                let default = get_text_default(key, variable, &scope, engine);
                ask_text(input, &prompt, &default)?
            }
        };

        scope.insert(key.clone(), value.clone());
        answers.insert(key.clone(), value);
    }

    Ok(answers)
}
