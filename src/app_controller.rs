use anyhow::{Context, Result};
use log::{debug, info};

use crate::{
    engine::{
        aggregate::Aggregator,
        config::{CodepickerConfig, CodepickerConfigBuilder},
        config_file, reconcile, report,
        token::Tokenizer,
    },
    ui::{cli::Cli, output},
};

/// The primary orchestration function for the application.
///
/// Control flow: resolve config → aggregate into a run-scoped staging
/// directory → reconcile staging into the output directory → write the
/// token report → print the summary. Any error propagates to `main` with
/// its context chain; no step is retried.
pub fn run(args: Cli) -> Result<()> {
    let config = build_config(&args)?;
    debug!("Resolved configuration: {config:?}");

    let tokenizer = Tokenizer::new(config.tokenizer)
        .with_context(|| format!("Failed to load tokenizer {}", config.tokenizer))?;

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    // Staging is scoped to this run: the TempDir guard removes it on every
    // exit path, including reconciliation failure.
    let staging = tempfile::Builder::new()
        .prefix("codepicker-")
        .tempdir()
        .context("Failed to create staging directory")?;
    info!("Staging into {}", staging.path().display());

    let result = Aggregator::new(&config, &tokenizer, staging.path()).run()?;

    reconcile::reconcile(staging.path(), &config.output_dir, config.force_overwrite)?;
    report::write_token_info(&config.output_dir, &result)?;

    output::print_summary(&result, &config.output_dir, config.tokenizer);
    Ok(())
}

/// Merges the three configuration layers: CLI flags over config file over
/// built-in defaults.
fn build_config(args: &Cli) -> Result<CodepickerConfig> {
    let file = config_file::resolve(&args.input, args.config.as_deref())?;

    let mut builder = CodepickerConfigBuilder::default();
    builder
        .input_root(args.input.clone())
        .output_dir(args.output.clone())
        .excluded_dirs(file.excluded_dirs)
        .file_extensions(file.file_extensions)
        .special_dirs(file.special_dirs)
        .force_overwrite(args.force);
    if let Some(tokenizer) = args.tokenizer.or(file.tokenizer) {
        builder.tokenizer(tokenizer);
    }

    builder.build().context("Failed to build configuration")
}
