use std::path::Path;

use crate::common::format::format_tokens;
use crate::engine::model::RunResult;
use crate::engine::token::{TokenizerChoice, get_model_info};

/// Prints the end-of-run summary to stdout.
pub fn print_summary(result: &RunResult, output_dir: &Path, tokenizer: TokenizerChoice) {
    let line = "=".repeat(40);
    println!(
        "\n{line}\n\
         Files Processed: {}\n\
         Total Tokens:    {} ({})\n\
         Output:          {}\n\
         {line}",
        result.processed_files.len(),
        format_tokens(result.total_tokens),
        get_model_info(tokenizer),
        output_dir.display(),
    );
}
