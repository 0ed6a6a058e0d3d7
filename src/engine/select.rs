//! This module lists the directory entries eligible for aggregation.
//!
//! Names are returned lexicographically sorted rather than in filesystem
//! enumeration order, so staging output and the manifest are reproducible
//! across platforms.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Returns the names of regular files in `dir` whose name does not start
/// with a dot and whose extension (lowercased, without the dot) is in
/// `extensions`.
pub fn eligible_files(dir: &Path, extensions: &[String]) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in read_dir(dir)? {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        if !entry.file_type().is_ok_and(|ft| ft.is_file()) {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        if extension_of(&name).is_some_and(|ext| extensions.iter().any(|e| *e == ext)) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

/// Returns the names of subdirectories of `dir` whose name does not start
/// with a dot.
pub fn eligible_subdirs(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in read_dir(dir)? {
        let entry = entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        if !entry.file_type().is_ok_and(|ft| ft.is_dir()) {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if !name.starts_with('.') {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

fn read_dir(dir: &Path) -> Result<fs::ReadDir> {
    fs::read_dir(dir).with_context(|| format!("Failed to read directory {}", dir.display()))
}

/// Lowercased extension after the last dot, if any. A leading dot does not
/// count ("`.gitignore`" has no extension), but callers skip dotfiles anyway.
fn extension_of(name: &str) -> Option<String> {
    let (stem, ext) = name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
