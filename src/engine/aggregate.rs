//! The aggregation engine: a depth-first walk that routes every eligible
//! file into exactly one staging output file.
//!
//! Special directories (the input root, plus every `special_dirs` entry) act
//! as aggregation roots: each of their children starts a fresh output file
//! named after its relative path, while a directory whose parent is ordinary
//! keeps appending to the file it inherited. The staging area therefore ends
//! up with a flat, predictable fan-out regardless of tree depth.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::common::path::join_rel;
use crate::engine::{
    config::CodepickerConfig, model::RunResult, normalize::strip_blank_lines, select,
    token::Tokenizer,
};

pub const FILE_DELIMITER: &str = "=== FILE BOUNDARY ====";

/// Walks one input tree and writes delimited file blocks into the staging
/// area.
///
/// Owns every open staging file handle for the duration of the run; one
/// append-mode handle per aggregation root, opened on first use and closed
/// on drop whether the run succeeds or fails.
pub struct Aggregator<'a> {
    config: &'a CodepickerConfig,
    tokenizer: &'a Tokenizer,
    staging_root: &'a Path,
    sinks: HashMap<PathBuf, File>,
}

impl<'a> Aggregator<'a> {
    pub fn new(
        config: &'a CodepickerConfig,
        tokenizer: &'a Tokenizer,
        staging_root: &'a Path,
    ) -> Self {
        Self {
            config,
            tokenizer,
            staging_root,
            sinks: HashMap::new(),
        }
    }

    /// Runs the walk from the input root. Any filesystem or tokenizer error
    /// aborts the whole run; staging contents written before the failure are
    /// a best-effort intermediate state.
    pub fn run(mut self) -> Result<RunResult> {
        self.visit("", false, None)
    }

    /// Visits the directory at `rel` (forward-slash path relative to the
    /// input root, empty for the root itself).
    ///
    /// `parent_is_special` and `inherited_sink` carry the routing state of
    /// the recursion: a special parent forces a fresh output file for this
    /// node, an ordinary parent hands its own sink down.
    fn visit(
        &mut self,
        rel: &str,
        parent_is_special: bool,
        inherited_sink: Option<&Path>,
    ) -> Result<RunResult> {
        let mut result = RunResult::default();

        // Hard pruning point: nothing beneath an excluded directory is ever
        // visited, regardless of what it contains.
        if self.config.is_excluded_dir(rel) {
            debug!("Pruned excluded directory '{rel}'");
            return Ok(result);
        }

        let is_special = self.config.is_special_dir(rel);

        let sink = if parent_is_special {
            self.staging_root.join(format!("{}.txt", sink_stem(rel)))
        } else {
            inherited_sink
                .map(Path::to_path_buf)
                .unwrap_or_else(|| self.staging_root.join("root.txt"))
        };

        let dir = if rel.is_empty() {
            self.config.input_root.clone()
        } else {
            self.config.input_root.join(rel)
        };

        let files = select::eligible_files(&dir, &self.config.file_extensions)?;
        if !files.is_empty() {
            self.process_files(&dir, rel, &files, &sink, &mut result)?;
            debug!(
                "Finished processing files in {}: {} tokens",
                dir.display(),
                result.total_tokens
            );
        }

        for name in select::eligible_subdirs(&dir)? {
            let child_rel = join_rel(rel, &name);
            let child = self.visit(&child_rel, is_special, Some(&sink))?;
            result.absorb(child);
        }

        Ok(result)
    }

    /// Appends one delimited block per file to `sink`, in the given order,
    /// and records each block's token count.
    fn process_files(
        &mut self,
        dir: &Path,
        rel: &str,
        files: &[String],
        sink: &Path,
        result: &mut RunResult,
    ) -> Result<()> {
        for name in files {
            let path = dir.join(name);
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let content = strip_blank_lines(&raw);

            let relative_path = join_rel(rel, name);
            let block = format!("{FILE_DELIMITER}\n// File path: {relative_path}\n{content}\n");
            let tokens = self.tokenizer.count(&block);

            self.sink_handle(sink)?
                .write_all(block.as_bytes())
                .with_context(|| format!("Failed to append to {}", sink.display()))?;

            result.record(relative_path, tokens);
        }
        Ok(())
    }

    /// One append-mode handle per staging file, shared across every
    /// directory routed to it for the whole run.
    fn sink_handle(&mut self, sink: &Path) -> Result<&mut File> {
        match self.sinks.entry(sink.to_path_buf()) {
            Entry::Occupied(e) => Ok(e.into_mut()),
            Entry::Vacant(v) => {
                let file = OpenOptions::new()
                    .append(true)
                    .create(true)
                    .open(sink)
                    .with_context(|| format!("Failed to open staging file {}", sink.display()))?;
                Ok(v.insert(file))
            }
        }
    }
}

/// Staging file stem for an aggregation root: path separators flattened to
/// underscores, `root` for the input root itself.
fn sink_stem(rel: &str) -> String {
    if rel.is_empty() {
        "root".to_owned()
    } else {
        rel.replace('/', "_")
    }
}
