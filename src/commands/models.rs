//! Handler for the `tokenomics models` command.

use colored::Colorize;

use crate::error::Result;
use crate::tokenizer::{known_encodings, FALLBACK_ENCODING};

/// Print the known encoding families and the models they cover.
pub fn run() -> Result<()> {
    println!("{}", "Known encodings".bold());
    for (encoding, models) in known_encodings() {
        println!("  {:<12} {}", encoding, models.join(", "));
    }
    println!();
    println!(
        "Unrecognized model names fall back to {}.",
        FALLBACK_ENCODING.bold()
    );
    Ok(())
}
