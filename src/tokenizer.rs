//! Tokenizer resolution.
//!
//! Maps a model name to a concrete byte-pair encoding via tiktoken-rs.
//! Resolution is a two-step strategy: exact lookup first, then a fallback
//! to the general-purpose `cl100k_base` table with a logged warning.
//! Unknown model names never fail the caller.

use tiktoken_rs::CoreBPE;
use tracing::warn;

use crate::error::{Result, TokenomicsError};

/// Encoding used when a model name has no registered table.
pub const FALLBACK_ENCODING: &str = "cl100k_base";

// ---------------------------------------------------------------------------
// Trait (extensibility point)
// ---------------------------------------------------------------------------

/// Splits text into token units under a model-specific vocabulary.
///
/// The estimator depends on this trait rather than on tiktoken-rs
/// directly, so alternative tables (custom BPE, test doubles) can be
/// substituted without touching the cost math.
pub trait Tokenizer: Send + Sync {
    /// Encode `text` into a sequence of token ids.
    fn encode(&self, text: &str) -> Vec<u32>;

    /// Number of tokens `text` encodes to.
    fn count(&self, text: &str) -> usize {
        self.encode(text).len()
    }

    /// Name of the encoding profile backing this tokenizer.
    fn name(&self) -> &str;
}

// ---------------------------------------------------------------------------
// BPE-backed encoding
// ---------------------------------------------------------------------------

/// A resolved byte-pair encoding for a specific model.
pub struct Encoding {
    name: String,
    bpe: CoreBPE,
}

impl Encoding {
    fn new(name: impl Into<String>, bpe: CoreBPE) -> Self {
        Self {
            name: name.into(),
            bpe,
        }
    }
}

impl Tokenizer for Encoding {
    fn encode(&self, text: &str) -> Vec<u32> {
        self.bpe.encode_ordinary(text)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Encoding").field("name", &self.name).finish()
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Resolve the encoding registered for `model_name`.
///
/// The returned [`Encoding`] is named after the table it resolved to
/// (e.g. `cl100k_base` for gpt-4), not after the model. Unknown names
/// do not error: a warning is logged and the [`FALLBACK_ENCODING`]
/// table is returned instead. The only failure mode is a table failing
/// to load, which indicates a broken installation rather than bad
/// input.
pub fn resolve(model_name: &str) -> Result<Encoding> {
    match tiktoken_rs::tokenizer::get_tokenizer(model_name) {
        Some(table) => {
            let name = table_name(table);
            let bpe = tiktoken_rs::get_bpe_from_tokenizer(table)
                .map_err(|e| TokenomicsError::tokenizer(format!("loading {name}: {e}")))?;
            Ok(Encoding::new(name, bpe))
        }
        None => {
            warn!(
                model = model_name,
                "model not found, falling back to {FALLBACK_ENCODING} encoding"
            );
            let bpe = tiktoken_rs::cl100k_base().map_err(|e| {
                TokenomicsError::tokenizer(format!("loading {FALLBACK_ENCODING}: {e}"))
            })?;
            Ok(Encoding::new(FALLBACK_ENCODING, bpe))
        }
    }
}

fn table_name(table: tiktoken_rs::tokenizer::Tokenizer) -> &'static str {
    use tiktoken_rs::tokenizer::Tokenizer;
    match table {
        Tokenizer::O200kHarmony => "o200k_harmony",
        Tokenizer::O200kBase => "o200k_base",
        Tokenizer::Cl100kBase => "cl100k_base",
        Tokenizer::P50kBase => "p50k_base",
        Tokenizer::P50kEdit => "p50k_edit",
        Tokenizer::R50kBase => "r50k_base",
        Tokenizer::Gpt2 => "gpt2",
    }
}

// ---------------------------------------------------------------------------
// Known encoding families
// ---------------------------------------------------------------------------

/// Encoding families tiktoken-rs ships, with representative model names.
///
/// Informational only (backs the `models` subcommand); actual resolution
/// goes through [`resolve`].
pub fn known_encodings() -> &'static [(&'static str, &'static [&'static str])] {
    &[
        ("o200k_base", &["gpt-4o", "gpt-4o-mini", "o1", "o3"]),
        (
            "cl100k_base",
            &["gpt-4", "gpt-4-turbo", "gpt-3.5-turbo", "text-embedding-ada-002"],
        ),
        ("p50k_base", &["text-davinci-003", "code-davinci-002"]),
        ("r50k_base", &["davinci", "curie", "babbage", "ada"]),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_model() {
        let enc = resolve("gpt-4").unwrap();
        assert_eq!(enc.name(), "cl100k_base");
        assert!(enc.count("Hello world") > 0);
    }

    #[test]
    fn resolved_name_is_the_table_not_the_model() {
        assert_eq!(resolve("gpt-4-turbo").unwrap().name(), "cl100k_base");
        assert_eq!(resolve("gpt-4o").unwrap().name(), "o200k_base");
        assert_eq!(resolve("text-davinci-003").unwrap().name(), "p50k_base");
    }

    #[test]
    fn resolve_unknown_model_falls_back() {
        let enc = resolve("definitely-not-a-model").unwrap();
        assert_eq!(enc.name(), FALLBACK_ENCODING);
        assert!(enc.count("Hello world") > 0);
    }

    #[test]
    fn empty_text_encodes_to_nothing() {
        let enc = resolve("gpt-4").unwrap();
        assert!(enc.encode("").is_empty());
        assert_eq!(enc.count(""), 0);
    }

    #[test]
    fn longer_text_never_fewer_tokens() {
        let enc = resolve("gpt-4").unwrap();
        let short = enc.count("Hi");
        let long = enc.count(&"Hello world ".repeat(100));
        assert!(long > short);
    }

    #[test]
    fn fallback_table_is_listed() {
        assert!(known_encodings()
            .iter()
            .any(|(name, _)| *name == FALLBACK_ENCODING));
    }

    #[test]
    fn trait_object_works() {
        let enc: Box<dyn Tokenizer> = Box::new(resolve("gpt-4").unwrap());
        assert!(enc.count("abcd") > 0);
        assert_eq!(enc.name(), "cl100k_base");
    }
}
