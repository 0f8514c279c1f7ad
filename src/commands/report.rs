//! Handler for the `tokenomics report` command.
//!
//! Reads a text file, estimates tokens and cost under the configured
//! model, and prints the formatted report. A missing input file is a
//! reported condition, not a failure: the handler prints a diagnostic
//! and returns Ok so the process exits cleanly.

use std::path::PathBuf;

use colored::Colorize;
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, TokenomicsError};
use crate::estimator;
use crate::report::{self, Report};

/// All inputs needed to run the report command.
#[derive(Debug)]
pub struct ReportCommandOptions {
    /// Input text file (falls back to the configured input_path).
    pub path: Option<PathBuf>,
    /// Model override.
    pub model: Option<String>,
    /// Price override (USD per 1000 tokens).
    pub price: Option<f64>,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Path to config file.
    pub config_path: Option<PathBuf>,
}

/// Run the report command.
pub fn run(options: ReportCommandOptions) -> Result<()> {
    let config = crate::config::load_effective(options.config_path.as_deref())?;
    let model = options.model.unwrap_or_else(|| config.model.clone());
    let price = resolve_price(options.price, &config)?;
    let path = options.path.unwrap_or_else(|| config.input_path.clone());

    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            // Soft early return per the CLI contract: report, don't fail.
            println!(
                "{} Input file not found at {}",
                "error:".red().bold(),
                path.display()
            );
            println!("Please ensure '{}' exists before running.", path.display());
            return Ok(());
        }
        Err(e) => {
            return Err(TokenomicsError::io(
                format!("reading input from '{}'", path.display()),
                e,
            ))
        }
    };

    if !options.quiet {
        println!("Analyzing {}...", path.display());
    }
    debug!(chars = text.chars().count(), model = %model, "estimating");

    let estimate = estimator::estimate_tokens_and_cost(&text, &model, price)?;
    let report = Report {
        model,
        char_count: text.chars().count(),
        estimate,
    };
    print!("{}", report::render(&report));
    Ok(())
}

pub(crate) fn resolve_price(override_price: Option<f64>, config: &Config) -> Result<f64> {
    let price = override_price.unwrap_or(config.price_per_1k_tokens);
    if !price.is_finite() || price < 0.0 {
        return Err(TokenomicsError::validation(
            "price",
            "must be a finite number >= 0",
        ));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(ReportCommandOptions {
            path: Some(dir.path().join("no-such-outline.txt")),
            model: None,
            price: None,
            quiet: true,
            config_path: None,
        });
        assert!(result.is_ok());
    }

    #[test]
    fn report_on_real_file_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("outline.txt");
        std::fs::write(&path, "Hello world, a short outline.").unwrap();
        run(ReportCommandOptions {
            path: Some(path),
            model: Some("gpt-4-turbo".into()),
            price: Some(0.01),
            quiet: true,
            config_path: None,
        })
        .unwrap();
    }

    #[test]
    fn negative_price_override_rejected() {
        let config = Config::default();
        assert!(resolve_price(Some(-1.0), &config).is_err());
        assert!(resolve_price(Some(0.02), &config).is_ok());
        assert_eq!(
            resolve_price(None, &config).unwrap(),
            config.price_per_1k_tokens
        );
    }
}
