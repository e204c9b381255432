//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - initializes logging
//! - runs the load -> sweep -> write pipeline
//! - prints debug reports

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::domain::{ModelFiles, RunConfig, SweepRange};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `orthopoly` binary.
pub fn run() -> Result<(), AppError> {
    // Environment defaults for `env = ...` flags may come from a local `.env`.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_logging(cli.debug_enabled());

    let config = run_config_from_args(&cli)?;
    let run = pipeline::run_pipeline(&config)?;

    if config.debug {
        println!(
            "{}",
            crate::report::format_model_report(config.files.base_name(), &run.model)
        );
        println!(
            "{}",
            crate::report::format_run_summary(&config, &run.model, &run.samples)
        );
    }

    Ok(())
}

/// Resolve CLI flags into a validated run configuration.
pub fn run_config_from_args(cli: &Cli) -> Result<RunConfig, AppError> {
    let range = SweepRange::new(cli.min, cli.step, cli.max)?;
    let files = ModelFiles::new(cli.base_name.clone()).with_output_dir(cli.output_dir.clone());

    Ok(RunConfig {
        files,
        range,
        parse_mode: cli.parse_mode,
        debug: cli.debug_enabled(),
        from_json: cli.from_json.clone(),
        export_curve: cli.export_curve.clone(),
    })
}

/// Log to stderr. `RUST_LOG` wins; otherwise `warn`, or `debug` in debug mode.
fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
