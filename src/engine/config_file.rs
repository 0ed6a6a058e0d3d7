use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::engine::token::TokenizerChoice;

pub const PROJECT_CONFIG_NAME: &str = ".codepicker.toml";

const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules", ".git", "dist", "build", "test"];
const DEFAULT_FILE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx", "md"];
const DEFAULT_SPECIAL_DIRS: &[&str] = &["app", "app/spaces", "lib"];

/// Represents the structure of the `.codepicker.toml` file.
/// All fields are optional, so users only need to specify what they want to override.
#[derive(Default, Serialize, Deserialize, Debug, Clone)]
pub struct ConfigFile {
    pub excluded_dirs: Option<Vec<String>>,
    pub file_extensions: Option<Vec<String>>,
    pub special_dirs: Option<Vec<String>>,
    pub tokenizer: Option<TokenizerChoice>,
}

/// A fully-resolved config-file layer: every field present, file values
/// shallow-merged over the built-in defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfigFile {
    pub excluded_dirs: Vec<String>,
    pub file_extensions: Vec<String>,
    pub special_dirs: Vec<String>,
    pub tokenizer: Option<TokenizerChoice>,
}

impl ResolvedConfigFile {
    fn from_overrides(file: ConfigFile) -> Self {
        let strings = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Self {
            excluded_dirs: file
                .excluded_dirs
                .unwrap_or_else(|| strings(DEFAULT_EXCLUDED_DIRS)),
            file_extensions: file
                .file_extensions
                .unwrap_or_else(|| strings(DEFAULT_FILE_EXTENSIONS)),
            special_dirs: file
                .special_dirs
                .unwrap_or_else(|| strings(DEFAULT_SPECIAL_DIRS)),
            tokenizer: file.tokenizer,
        }
    }
}

/// Locates and parses the config file, merging it over the built-in defaults.
///
/// Search order:
/// 1. `explicit` (the `--config` flag) — must exist and parse.
/// 2. Project-local: `<input_root>/.codepicker.toml`
/// 3. User-global: `<config_dir>/codepicker/config.toml`
/// 4. Built-in defaults.
///
/// A file that is found but cannot be parsed is a fatal error.
pub fn resolve(input_root: &Path, explicit: Option<&Path>) -> Result<ResolvedConfigFile> {
    if let Some(path) = explicit {
        let file = load(path)?;
        info!("Loaded configuration from {}", path.display());
        return Ok(ResolvedConfigFile::from_overrides(file));
    }

    for candidate in search_paths(input_root) {
        if candidate.is_file() {
            let file = load(&candidate)?;
            info!("Loaded configuration from {}", candidate.display());
            return Ok(ResolvedConfigFile::from_overrides(file));
        }
        debug!("No config file at {}", candidate.display());
    }

    info!("No config file found, using built-in defaults");
    Ok(ResolvedConfigFile::from_overrides(ConfigFile::default()))
}

fn search_paths(input_root: &Path) -> Vec<PathBuf> {
    let mut candidates = vec![input_root.join(PROJECT_CONFIG_NAME)];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("codepicker").join("config.toml"));
    }
    candidates
}

fn load(path: &Path) -> Result<ConfigFile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("Malformed config file {}", path.display()))
}
