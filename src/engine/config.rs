// src/engine/config.rs

use std::path::PathBuf;

use derive_builder::Builder;

use crate::engine::token::TokenizerChoice;

/// Immutable configuration for one aggregation run.
///
/// Built once at startup from CLI flags and the resolved config file, then
/// passed down the call chain by reference.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(name = "build_internal", private))]
pub struct CodepickerConfig {
    #[builder(default = "PathBuf::from(\".\")")]
    pub input_root: PathBuf,

    #[builder(default = "PathBuf::from(\"./codepicker-output\")")]
    pub output_dir: PathBuf,

    /// Relative directory paths pruned from the walk, matched exactly.
    #[builder(default)]
    pub excluded_dirs: Vec<String>,

    /// Allowed file extensions, lowercase, without the leading dot.
    #[builder(default)]
    pub file_extensions: Vec<String>,

    /// Relative directory paths that start a new aggregation output file.
    #[builder(default)]
    pub special_dirs: Vec<String>,

    #[builder(default)]
    pub force_overwrite: bool,

    #[builder(default = "TokenizerChoice::Cl100k")]
    pub tokenizer: TokenizerChoice,
}

impl CodepickerConfigBuilder {
    pub fn build(&self) -> Result<CodepickerConfig, CodepickerConfigBuilderError> {
        let mut config = self.build_internal()?;
        // Extensions compare lowercased on both sides; normalize once here.
        for ext in &mut config.file_extensions {
            *ext = ext.trim_start_matches('.').to_ascii_lowercase();
        }
        Ok(config)
    }
}

impl CodepickerConfig {
    /// A directory is special when it is the input root (empty relative
    /// path) or its relative path is listed in `special_dirs`.
    pub fn is_special_dir(&self, relative_path: &str) -> bool {
        relative_path.is_empty() || self.special_dirs.iter().any(|d| d == relative_path)
    }

    pub fn is_excluded_dir(&self, relative_path: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == relative_path)
    }
}
