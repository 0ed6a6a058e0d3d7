//! This module encapsulates the logic for counting the tokens in the aggregated text.

use std::sync::Arc;

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tiktoken_rs::{CoreBPE, get_bpe_from_tokenizer, tokenizer::Tokenizer as TiktokenEncoding};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerChoice {
    /// For GPT-4o, GPT-4 Turbo, and o1 models.
    O200kBase,
    /// For ChatGPT models, text-embedding-ada-002. (Default)
    Cl100k,
    /// For Code models, text-davinci-002, text-davinci-003.
    P50kBase,
    /// For Edit models like text-davinci-edit-001.
    P50kEdit,
    /// For GPT-3 models like davinci.
    #[value(name = "r50k_base", alias = "gpt2")]
    R50kBase,
}

impl std::fmt::Display for TokenizerChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenizerChoice::O200kBase => write!(f, "o200k_base"),
            TokenizerChoice::Cl100k => write!(f, "cl100k"),
            TokenizerChoice::P50kBase => write!(f, "p50k_base"),
            TokenizerChoice::P50kEdit => write!(f, "p50k_edit"),
            TokenizerChoice::R50kBase => write!(f, "r50k_base"),
        }
    }
}

/// Returns the model information associated with the encoding.
pub fn get_model_info(tokenizer_name: TokenizerChoice) -> &'static str {
    match tokenizer_name {
        TokenizerChoice::O200kBase => "GPT-4o models, o1 models",
        TokenizerChoice::Cl100k => "ChatGPT models, text-embedding-ada-002",
        TokenizerChoice::P50kBase => "Code models, text-davinci-002, text-davinci-003",
        TokenizerChoice::P50kEdit => {
            "Edit models like text-davinci-edit-001, code-davinci-edit-001"
        }
        TokenizerChoice::R50kBase => "GPT-3 models like davinci",
    }
}

/// A ready-to-use BPE handle, built once at startup and passed down the run.
///
/// Cloning is cheap (shared `CoreBPE`). Keeping the handle explicit avoids
/// process-wide tokenizer state.
#[derive(Clone)]
pub struct Tokenizer {
    bpe: Arc<CoreBPE>,
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer").finish_non_exhaustive()
    }
}

impl Tokenizer {
    pub fn new(choice: TokenizerChoice) -> Result<Self> {
        let encoding = match choice {
            TokenizerChoice::O200kBase => TiktokenEncoding::O200kBase,
            TokenizerChoice::Cl100k => TiktokenEncoding::Cl100kBase,
            TokenizerChoice::P50kBase => TiktokenEncoding::P50kBase,
            TokenizerChoice::P50kEdit => TiktokenEncoding::P50kEdit,
            TokenizerChoice::R50kBase => TiktokenEncoding::R50kBase,
        };
        let bpe = get_bpe_from_tokenizer(encoding).map_err(|e| anyhow::anyhow!(e))?;
        Ok(Self { bpe: Arc::new(bpe) })
    }

    /// Counts the tokens in `text`, special tokens included.
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_with_special_tokens(text).len()
    }
}
