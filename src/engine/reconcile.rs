//! Merges the staging area into the persistent output directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

/// Copies staged output files into `output_dir`, creating it if needed.
///
/// A staged file is copied when `force_overwrite` is set or no file of that
/// name exists yet; otherwise it is copied only when the byte sizes differ.
/// Size comparison is a deliberate heuristic carried over from the original
/// tool: a same-size content change is not detected. Files already in
/// `output_dir` but absent from this run are never deleted.
pub fn reconcile(staging_dir: &Path, output_dir: &Path, force_overwrite: bool) -> Result<()> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    for name in staged_file_names(staging_dir)? {
        let staged = staging_dir.join(&name);
        let target = output_dir.join(&name);

        if force_overwrite || !target.exists() {
            copy(&staged, &target)?;
            info!("Copied {name} to output directory");
            continue;
        }

        let staged_len = file_len(&staged)?;
        let target_len = file_len(&target)?;
        if staged_len != target_len {
            copy(&staged, &target)?;
            info!("Updated {name} in output directory");
        } else {
            info!("Skipped {name} (no changes)");
        }
    }
    Ok(())
}

fn staged_file_names(staging_dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(staging_dir)
        .with_context(|| format!("Failed to read staging directory {}", staging_dir.display()))?;
    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| {
            format!("Failed to read entry in {}", staging_dir.display())
        })?;
        if entry.file_type().is_ok_and(|ft| ft.is_file()) {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

fn file_len(path: &Path) -> Result<u64> {
    let md = fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?;
    Ok(md.len())
}

fn copy(from: &Path, to: &Path) -> Result<()> {
    fs::copy(from, to)
        .with_context(|| format!("Failed to copy {} to {}", from.display(), to.display()))?;
    Ok(())
}
