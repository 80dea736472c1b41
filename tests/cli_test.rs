use hatch::cli::Args;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("hatch")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["simple-app"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.name.as_deref(), Some("simple-app"));
    assert!(parsed.template.is_none());
    assert!(parsed.boilerplate_type.is_none());
    assert!(!parsed.force);
    assert!(!parsed.silent);
    assert!(!parsed.verbose);
}

#[test]
fn test_name_is_optional() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();
    assert!(parsed.name.is_none());
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "simple-app",
        "--template=./boilerplates/simple",
        "--force",
        "--silent",
        "--verbose",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.template, Some(PathBuf::from("./boilerplates/simple")));
    assert!(parsed.force);
    assert!(parsed.silent);
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-f", "-s", "-v", "simple-app"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.force);
    assert!(parsed.silent);
    assert!(parsed.verbose);
}

#[test]
fn test_type_and_registry() {
    let args = make_args(&["simple-app", "--type=simple", "--registry", "./registry.yaml"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.boilerplate_type.as_deref(), Some("simple"));
    assert_eq!(parsed.registry, Some(PathBuf::from("./registry.yaml")));
}

#[test]
fn test_template_and_type_together() {
    let args = make_args(&["simple-app", "--template=./simple", "--type=simple"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.template, Some(PathBuf::from("./simple")));
    assert_eq!(parsed.boilerplate_type.as_deref(), Some("simple"));
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["simple-app", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}
