//! Serializes the run manifest into `token_info.txt`.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::engine::model::RunResult;

pub const TOKEN_INFO_FILE: &str = "token_info.txt";

/// Writes the total token count and the per-file listing to
/// `<output_dir>/token_info.txt`, overwriting any previous report.
pub fn write_token_info(output_dir: &Path, result: &RunResult) -> Result<()> {
    let mut content = format!("Total Tokens: {}\n\nFiles:\n", result.total_tokens);
    for file in &result.processed_files {
        // Writing to a String cannot fail.
        let _ = writeln!(content, "{}: {} tokens", file.relative_path, file.tokens);
    }

    let path = output_dir.join(TOKEN_INFO_FILE);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write token report {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::model::RunResult;

    #[test]
    fn report_format_matches_expected_layout() {
        let dir = tempfile::tempdir().unwrap();
        let mut result = RunResult::default();
        result.record("app/a.js".into(), 12);
        result.record("lib/b.js".into(), 7);

        write_token_info(dir.path(), &result).unwrap();

        let report = std::fs::read_to_string(dir.path().join(TOKEN_INFO_FILE)).unwrap();
        assert_eq!(
            report,
            "Total Tokens: 19\n\nFiles:\napp/a.js: 12 tokens\nlib/b.js: 7 tokens\n"
        );
    }
}
