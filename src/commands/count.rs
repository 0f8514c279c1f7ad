//! Handler for the `tokenomics count` command.
//!
//! Counts tokens for a literal string, a file, or stdin, and prints the
//! count and projected cost either human-readable or as JSON.

use std::io::Read;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::{Result, TokenomicsError};
use crate::estimator::Estimator;
use crate::report::format_thousands;

/// All inputs needed to run the count command.
#[derive(Debug)]
pub struct CountCommandOptions {
    /// Literal text to tokenize.
    pub text: Option<String>,
    /// Read the text from this file instead.
    pub file: Option<PathBuf>,
    /// Model override.
    pub model: Option<String>,
    /// Price override (USD per 1000 tokens).
    pub price: Option<f64>,
    /// Emit machine-readable JSON.
    pub json: bool,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Path to config file.
    pub config_path: Option<PathBuf>,
}

#[derive(Serialize)]
struct CountOutput<'a> {
    model: &'a str,
    encoding: &'a str,
    tokens: usize,
    cost: f64,
}

/// Run the count command.
pub fn run(options: CountCommandOptions) -> Result<()> {
    let config = crate::config::load_effective(options.config_path.as_deref())?;
    let model = options.model.unwrap_or_else(|| config.model.clone());
    let price = super::report::resolve_price(options.price, &config)?;

    let text = read_input(options.text, options.file.as_deref())?;
    let estimator = Estimator::new(&model, price)?;
    let estimate = estimator.estimate(&text);

    if options.json {
        let output = CountOutput {
            model: &model,
            encoding: estimator.encoding_name(),
            tokens: estimate.token_count,
            cost: estimate.estimated_cost,
        };
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| TokenomicsError::config_with_source("serializing output", e))?;
        println!("{json}");
    } else {
        if !options.quiet {
            println!("model:  {} ({})", model, estimator.encoding_name());
        }
        println!("tokens: {}", format_thousands(estimate.token_count));
        println!("cost:   ${:.6} USD", estimate.estimated_cost);
    }
    Ok(())
}

/// Pick the input source: literal text, file, or stdin (in that order).
fn read_input(text: Option<String>, file: Option<&std::path::Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path).map_err(|e| {
            TokenomicsError::io(format!("reading input from '{}'", path.display()), e)
        });
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| TokenomicsError::io("reading stdin", e))?;
    Ok(buf)
}
