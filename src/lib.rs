//! tokenomics: estimate LLM token counts and input-token cost for text.
//!
//! The core is a single pure operation,
//! [`estimator::estimate_tokens_and_cost`]: resolve a tokenizer for a
//! model name (falling back to `cl100k_base` for unknown names), encode
//! the text, and project a USD cost at a price-per-1000-tokens rate.
//! Everything else is CLI plumbing around it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod estimator;
pub mod report;
pub mod tokenizer;
