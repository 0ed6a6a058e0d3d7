use anyhow::Result;
use clap::Parser;

// ──────────────────────────────────────────────────────────────
//  Entry point
// ──────────────────────────────────────────────────────────────
fn main() -> Result<()> {
    env_logger::init();
    let args = codepicker::ui::cli::Cli::parse();
    codepicker::app_controller::run(args)
}
