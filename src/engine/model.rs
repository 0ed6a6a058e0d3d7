//! Contains the core data structures for the application.

use serde::Serialize;

/// One eligible file that was folded into a staging output file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProcessedFile {
    /// Path relative to the input root, forward-slash separated.
    pub relative_path: String,
    /// Token count of the whole delimited block written for this file.
    pub tokens: usize,
}

/// The accumulated outcome of one aggregation run, built bottom-up in
/// traversal order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunResult {
    pub processed_files: Vec<ProcessedFile>,
    pub total_tokens: usize,
}

impl RunResult {
    pub fn record(&mut self, relative_path: String, tokens: usize) {
        self.total_tokens += tokens;
        self.processed_files.push(ProcessedFile {
            relative_path,
            tokens,
        });
    }

    /// Folds a child directory's result into this one, preserving order.
    pub fn absorb(&mut self, child: RunResult) {
        self.total_tokens += child.total_tokens;
        self.processed_files.extend(child.processed_files);
    }
}
