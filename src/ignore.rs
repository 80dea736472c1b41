//! File and directory ignore pattern handling for boilerplates.
//! Patterns come from the `ignore` list of the boilerplate metadata and are
//! matched against paths relative to the boilerplate directory.

use crate::constants::DEFAULT_IGNORE_PATTERNS;
use crate::error::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;

/// Compiles the boilerplate's ignore patterns together with the built-in defaults.
///
/// # Errors
/// * `Error::GlobError` for an invalid pattern
pub fn build_ignore_set<S: AsRef<str>>(patterns: &[S]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in DEFAULT_IGNORE_PATTERNS {
        builder.add(Glob::new(pattern)?);
    }
    for pattern in patterns {
        debug!("Ignoring '{}'", pattern.as_ref());
        builder.add(Glob::new(pattern.as_ref())?);
    }
    Ok(builder.build()?)
}
