use hatch::ignore::build_ignore_set;

#[test]
fn test_default_patterns() {
    let glob_set = build_ignore_set::<&str>(&[]).unwrap();
    assert!(glob_set.is_match(".DS_Store"));
    assert!(glob_set.is_match("resource/doc/.DS_Store"));
    assert!(!glob_set.is_match("package.json"));
}

#[test]
fn test_boilerplate_patterns() {
    let glob_set = build_ignore_set(&["*.pyc", "node_modules"]).unwrap();
    assert!(glob_set.is_match("file.pyc"));
    assert!(glob_set.is_match("node_modules"));
    assert!(glob_set.is_match(".DS_Store"));
    assert!(!glob_set.is_match("index.js"));
}

#[test]
fn test_invalid_pattern() {
    assert!(build_ignore_set(&["a[b"]).is_err());
}
