//! Common constants used throughout the Hatch application.

/// Supported configuration file names
pub const CONFIG_FILES: [&str; 3] = ["hatch.json", "hatch.yml", "hatch.yaml"];

/// Directory inside a boilerplate holding the files to materialize
pub const CONTENT_DIR: &str = "boilerplate";

/// README template file name used when the metadata does not name one
pub const DEFAULT_README: &str = "README.md";

/// README written when the boilerplate does not ship a template
pub const FALLBACK_README: &str = "# {{ name }}\n";

/// Patterns that are never materialized
pub const DEFAULT_IGNORE_PATTERNS: [&str; 2] = ["**/.DS_Store", ".DS_Store"];

/// File names rewritten on output; package registries strip dot files on publish
pub const DEFAULT_RENAMES: [(&str, &str); 6] = [
    ("gitignore", ".gitignore"),
    ("_gitignore", ".gitignore"),
    ("_.gitignore", ".gitignore"),
    ("_.npmignore", ".npmignore"),
    ("_.eslintignore", ".eslintignore"),
    ("_package.json", "package.json"),
];
