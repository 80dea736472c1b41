use hatch::command::run;
use hatch::error::Error;
use hatch::prompt::{InputEvent, ScriptedInput};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn template_arg(name: &str) -> String {
    format!("--template={}", fixtures().join(name).display())
}

fn registry_arg() -> String {
    format!("--registry={}", fixtures().join("registry.yaml").display())
}

#[test_log::test]
fn test_silent_generation() {
    let cwd = TempDir::new().unwrap();
    let mut input = ScriptedInput::default();
    let target =
        run(cwd.path(), ["simple-app".to_string(), template_arg("simple-test"), "--silent".to_string()], &mut input)
            .unwrap();

    assert_eq!(target, cwd.path().join("simple-app"));
    assert!(target.join(".gitignore").exists());
    assert!(target.join(".eslintrc").exists());
    assert!(target.join(".npmignore").exists());
    assert!(target.join("package.json").exists());
    assert!(target.join("simple-app").exists());
    assert!(target.join("test").join("simple-app.test.js").exists());
    assert!(target.join("resource").join("doc").join("index.md").exists());
    assert!(fs::symlink_metadata(target.join("doc")).unwrap().file_type().is_symlink());
    assert!(target.join("doc").join("index.md").exists());

    let content = fs::read_to_string(target.join("README.md")).unwrap();
    assert!(content.contains("# simple-app"));
    assert!(content.contains("simple-app project"));
    assert!(content.contains("No tests yet."));
    assert!(!content.contains("filter-test"));
    assert!(content.contains("Write variables as {{ name }} to keep them literal."));

    let package = fs::read_to_string(target.join("package.json")).unwrap();
    assert!(package.contains("\"name\": \"simple-app\""));
    assert!(package.contains("default-simple-app"));
}

#[test_log::test]
fn test_generation_with_prompt() {
    let cwd = TempDir::new().unwrap();
    let mut input = ScriptedInput::new(vec![
        InputEvent::line("simple-app"),
        InputEvent::line("this is xxx"),
        InputEvent::Confirm,
        InputEvent::line("TZ"),
        InputEvent::Confirm,
        InputEvent::Confirm,
    ]);
    let target = run(
        cwd.path(),
        ["simple-app".to_string(), "--force".to_string(), template_arg("simple-test")],
        &mut input,
    )
    .unwrap();

    assert_eq!(input.remaining(), 0);
    assert!(target.join(".gitignore").exists());
    assert!(target.join(".eslintrc").exists());
    assert!(target.join("package.json").exists());
    assert!(target.join("simple-app").exists());
    assert!(target.join("test").join("simple-app.test.js").exists());

    let content = fs::read_to_string(target.join("README.md")).unwrap();
    assert!(content.contains("this is xxx"));
    assert!(content.contains("default-simple-app"));
    assert!(content.contains("Timezone: TZ"));
    assert!(content.contains("filter-test"));
    assert!(content.contains("listA"));
    assert!(!content.contains("No tests yet."));
}

#[test_log::test]
fn test_prompt_for_boilerplate() {
    let cwd = TempDir::new().unwrap();
    let mut input = ScriptedInput::new(vec![
        InputEvent::Down,
        InputEvent::Confirm,
        InputEvent::line("this is xxx"),
    ]);
    let target = run(cwd.path(), ["prompt-app".to_string(), "--force".to_string(), registry_arg()], &mut input)
        .unwrap();

    assert!(target.join(".gitignore").exists());
    assert!(target.join("package.json").exists());
    assert!(!target.join("doc").exists());

    let content = fs::read_to_string(target.join("README.md")).unwrap();
    assert!(content.contains("# prompt-app"));
    assert!(content.contains("this is xxx"));
    assert!(content.contains("Development"));
}

#[test_log::test]
fn test_boilerplate_type_from_registry() {
    let cwd = TempDir::new().unwrap();
    let mut input = ScriptedInput::default();
    let target = run(
        cwd.path(),
        ["simple-app".to_string(), "--type=simple".to_string(), "--silent".to_string(), registry_arg()],
        &mut input,
    )
    .unwrap();

    assert!(target.join(".gitignore").exists());
    assert!(target.join(".eslintrc").exists());
    assert!(target.join("package.json").exists());
    assert!(target.join("test").join("simple-app.test.js").exists());
}

#[test]
fn test_unknown_type_writes_nothing() {
    let cwd = TempDir::new().unwrap();
    let mut input = ScriptedInput::default();
    let result = run(
        cwd.path(),
        ["simple-app".to_string(), "--type=missing".to_string(), "--silent".to_string(), registry_arg()],
        &mut input,
    );

    assert!(matches!(result, Err(Error::NotFound { .. })));
    assert!(!cwd.path().join("simple-app").exists());
}

#[test]
fn test_second_run_conflicts_without_force() {
    let cwd = TempDir::new().unwrap();
    let args = ["simple-app".to_string(), template_arg("empty-test"), "--silent".to_string()];

    run(cwd.path(), args.clone(), &mut ScriptedInput::default()).unwrap();
    let result = run(cwd.path(), args.clone(), &mut ScriptedInput::default());
    assert!(matches!(result, Err(Error::Conflict { .. })));

    let mut forced = args.to_vec();
    forced.push("--force".to_string());
    run(cwd.path(), forced, &mut ScriptedInput::default()).unwrap();
}

#[test]
fn test_invalid_arguments() {
    let cwd = TempDir::new().unwrap();
    let result = run(cwd.path(), ["--unknown"], &mut ScriptedInput::default());
    assert!(matches!(result, Err(Error::CliError(_))));
}

#[test]
fn test_template_ignores_broken_registry() {
    let cwd = TempDir::new().unwrap();
    let missing = cwd.path().join("missing").join("registry.yaml");
    let target = run(
        cwd.path(),
        [
            "app".to_string(),
            template_arg("empty-test"),
            "--silent".to_string(),
            format!("--registry={}", missing.display()),
        ],
        &mut ScriptedInput::default(),
    )
    .unwrap();

    assert!(target.join("package.json").exists());
    assert!(target.join("README.md").exists());
}

#[test]
fn test_template_takes_priority_over_type() {
    let cwd = TempDir::new().unwrap();
    let target = run(
        cwd.path(),
        [
            "app".to_string(),
            template_arg("empty-test"),
            "--type=missing".to_string(),
            "--silent".to_string(),
            registry_arg(),
        ],
        &mut ScriptedInput::default(),
    )
    .unwrap();

    let content = fs::read_to_string(target.join("README.md")).unwrap();
    assert!(content.contains("Development"));
}
