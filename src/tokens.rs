//! Token counting for countgpt.
//!
//! Uses tiktoken-rs for BPE tokenization. The [`TokenEncoder`] trait is the
//! seam between the driver and the tokenizer library, so reports and the
//! visualizer can be exercised without loading a vocabulary.

use tiktoken_rs::CoreBPE;

use crate::error::CountError;
use crate::models::Encoding;

/// Token id as produced by the tokenizer.
pub type TokenId = u32;

/// Turns text into token ids and token ids back into text.
pub trait TokenEncoder {
    /// Encoding this encoder implements.
    fn encoding(&self) -> Encoding;

    /// Encode text as ordinary text (special-token markers are not special).
    fn encode(&self, text: &str) -> Vec<TokenId>;

    /// Decode a run of tokens. Fails if the bytes are not valid UTF-8.
    fn decode(&self, tokens: &[TokenId]) -> Result<String, CountError>;
}

/// [`TokenEncoder`] backed by a tiktoken BPE vocabulary.
pub struct Tiktoken {
    encoding: Encoding,
    bpe: CoreBPE,
}

impl Tiktoken {
    /// Load the vocabulary for `encoding`.
    pub fn load(encoding: Encoding) -> Result<Self, CountError> {
        let bpe = match encoding {
            // tiktoken's gpt2 encoding shares the r50k ranks.
            Encoding::Gpt2 | Encoding::R50kBase => tiktoken_rs::r50k_base(),
            Encoding::P50kBase => tiktoken_rs::p50k_base(),
            Encoding::P50kEdit => tiktoken_rs::p50k_edit(),
            Encoding::Cl100kBase => tiktoken_rs::cl100k_base(),
            Encoding::O200kBase => tiktoken_rs::o200k_base(),
        }
        .map_err(|e| CountError::tokenization(encoding, e))?;
        tracing::debug!(%encoding, "loaded tokenizer");
        Ok(Self { encoding, bpe })
    }
}

impl TokenEncoder for Tiktoken {
    fn encoding(&self) -> Encoding {
        self.encoding
    }

    fn encode(&self, text: &str) -> Vec<TokenId> {
        self.bpe.encode_ordinary(text)
    }

    fn decode(&self, tokens: &[TokenId]) -> Result<String, CountError> {
        self.bpe
            .decode(tokens.to_vec())
            .map_err(|e| CountError::tokenization(self.encoding, e))
    }
}

/// Tokens and derived counts for one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizationResult {
    pub tokens: Vec<TokenId>,
    /// Unicode scalar values in the source text.
    pub characters: usize,
}

impl TokenizationResult {
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

/// Tokenize `text` and record its character count.
pub fn count(encoder: &dyn TokenEncoder, text: &str) -> TokenizationResult {
    TokenizationResult {
        tokens: encoder.encode(text),
        characters: text.chars().count(),
    }
}

/// One token per `char`, ids are code points. Used by tests across the crate.
#[cfg(test)]
pub(crate) struct CharEncoder;

#[cfg(test)]
impl TokenEncoder for CharEncoder {
    fn encoding(&self) -> Encoding {
        Encoding::Cl100kBase
    }

    fn encode(&self, text: &str) -> Vec<TokenId> {
        text.chars().map(|c| c as TokenId).collect()
    }

    fn decode(&self, tokens: &[TokenId]) -> Result<String, CountError> {
        tokens
            .iter()
            .map(|&t| char::from_u32(t).ok_or_else(|| CountError::tokenization(self.encoding(), t)))
            .collect()
    }
}
