// src/ui/cli.rs

use std::path::PathBuf;

use clap::Parser;

use crate::engine::token::TokenizerChoice;

// ~~~ CLI Arguments ~~~
#[derive(Parser, Debug, Clone)]
#[clap(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION")
)]
pub struct Cli {
    /// Input directory to aggregate
    #[clap(short = 'i', long = "input", default_value = ".")]
    pub input: PathBuf,

    /// Output directory for the aggregated files
    #[clap(short = 'o', long = "output", default_value = "./codepicker-output")]
    pub output: PathBuf,

    /// Explicit config file path (skips the search)
    #[clap(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Force overwrite of all output files, skipping change detection
    #[clap(short = 'f', long = "force")]
    pub force: bool,

    /// Tokenizer to use for token counting.
    ///
    /// Overrides the `tokenizer` key of the config file.
    #[clap(short = 't', long = "tokenizer")]
    pub tokenizer: Option<TokenizerChoice>,
}
