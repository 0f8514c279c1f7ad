use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use tokenomics::cli::{Cli, ColorMode, Command};
use tokenomics::commands;
use tokenomics::commands::count::CountCommandOptions;
use tokenomics::commands::init::InitOptions;
use tokenomics::commands::report::ReportCommandOptions;
use tokenomics::error::TokenomicsError;

fn main() {
    let cli = Cli::parse();

    // Configure color output
    match cli.color {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {}
    }

    // Init tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), TokenomicsError> {
    match cli.command {
        Command::Report { path, model, price } => commands::report::run(ReportCommandOptions {
            path,
            model,
            price,
            quiet: cli.quiet,
            config_path: cli.config,
        }),
        Command::Count {
            text,
            file,
            model,
            price,
            json,
        } => commands::count::run(CountCommandOptions {
            text,
            file,
            model,
            price,
            json,
            quiet: cli.quiet,
            config_path: cli.config,
        }),
        Command::Models => commands::models::run(),
        Command::Init { root, force } => {
            let root = match root {
                Some(p) => p,
                None => std::env::current_dir()
                    .map_err(|e| TokenomicsError::io("getting current directory", e))?,
            };
            let result = commands::init::run(InitOptions { root, force })?;
            println!(
                "{} Created config at {}",
                "ok".green().bold(),
                result.config_path.display()
            );
            Ok(())
        }
    }
}
