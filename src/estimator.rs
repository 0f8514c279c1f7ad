//! Token and cost estimation.
//!
//! The single pure operation of the crate: encode a text under a named
//! model's tokenizer and project a USD cost from the token count at a
//! linear price-per-1000-tokens rate.

use serde::Serialize;

use crate::error::Result;
use crate::tokenizer::{self, Tokenizer};

/// Model assumed when the caller does not name one.
pub const DEFAULT_MODEL: &str = "gpt-4-turbo";

/// Placeholder input-token price in USD per 1000 tokens.
///
/// Hypothetical; real pricing varies by model and changes over time.
/// Callers should prefer the configured value.
pub const DEFAULT_PRICE_PER_1K_TOKENS: f64 = 0.01;

/// Result of estimating a single text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    /// Number of tokens the text encodes to.
    pub token_count: usize,
    /// Projected input cost in USD.
    pub estimated_cost: f64,
}

impl Estimate {
    fn new(token_count: usize, price_per_1k: f64) -> Self {
        Self {
            token_count,
            estimated_cost: (token_count as f64 / 1000.0) * price_per_1k,
        }
    }
}

/// Estimate token count and input cost for `text` under `model_name`.
///
/// Unknown model names resolve to the fallback encoding (see
/// [`crate::tokenizer::resolve`]); arbitrary text is always encodable,
/// so for valid inputs this only fails if the tokenizer tables cannot
/// be loaded at all. The empty string is zero tokens and zero cost.
pub fn estimate_tokens_and_cost(
    text: &str,
    model_name: &str,
    price_per_1k: f64,
) -> Result<Estimate> {
    let encoding = tokenizer::resolve(model_name)?;
    Ok(Estimate::new(encoding.count(text), price_per_1k))
}

/// Same as [`estimate_tokens_and_cost`] with the default model and price.
pub fn estimate_with_defaults(text: &str) -> Result<Estimate> {
    estimate_tokens_and_cost(text, DEFAULT_MODEL, DEFAULT_PRICE_PER_1K_TOKENS)
}

/// Estimator bound to one resolved encoding and price, for repeated use.
pub struct Estimator {
    encoding: Box<dyn Tokenizer>,
    price_per_1k: f64,
}

impl Estimator {
    /// Resolve `model_name` once and reuse the encoding across calls.
    pub fn new(model_name: &str, price_per_1k: f64) -> Result<Self> {
        Ok(Self {
            encoding: Box::new(tokenizer::resolve(model_name)?),
            price_per_1k,
        })
    }

    /// Name of the encoding this estimator resolved to.
    pub fn encoding_name(&self) -> &str {
        self.encoding.name()
    }

    pub fn estimate(&self, text: &str) -> Estimate {
        Estimate::new(self.encoding.count(text), self.price_per_1k)
    }
}
