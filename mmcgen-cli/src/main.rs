mod app;
mod commands;
mod output;

use anyhow::Context;
use clap::Parser;

use crate::app::{Cli, Command, GlobalOptions};

/// Route library logs to stderr, keeping stdout for the manifest or JSON report.
///
/// `--json` silences logging entirely, `--verbose` lowers the level to debug, and `RUST_LOG`
/// takes precedence over both levels.
fn init_logging(global: &GlobalOptions) {
    if global.json {
        return;
    }

    let level = if global.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_module("mmcgen", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\nInterrupted.");
        std::process::exit(130);
    })
    .context("cannot install Ctrl+C handler")?;

    let cli = Cli::parse();
    init_logging(&cli.global);

    match &cli.command {
        Command::Generate {
            path,
            output,
            strict,
            indent,
        } => commands::generate::run(
            path,
            &commands::generate::GenerateOptions {
                output: output.as_deref(),
                strict: *strict,
                indent: *indent,
                global: &cli.global,
            },
        ),
        Command::Validate { path } => commands::validate::run(path, &cli.global),
        Command::Tracks { path, strict } => commands::tracks::run(path, *strict, &cli.global),
    }
}
