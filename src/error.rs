//! Error types for countgpt.
//!
//! [`CountError::UnknownModel`] is fatal for a whole invocation; the other
//! variants are attached to a single input source and reported without
//! stopping the rest. Per-source errors do not carry the source label; the
//! caller prefixes it when reporting.

use thiserror::Error;

use crate::models::Encoding;

/// Errors raised while resolving a model or counting a source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CountError {
    /// The requested model matched no encoding, alias, or family prefix.
    #[error("Model '{model}' not found")]
    UnknownModel {
        /// The model string as given on the command line.
        model: String,
    },

    /// A source could not be read or does not hold UTF-8 text.
    #[error("{reason}")]
    UnreadableSource {
        /// Why the read failed.
        reason: String,
    },

    /// The tokenizer could not be loaded or rejected the input.
    #[error("{encoding} tokenizer failed: {reason}")]
    Tokenization {
        /// Encoding the tokenizer was loaded for.
        encoding: Encoding,
        /// Message from the tokenizer library.
        reason: String,
    },
}

impl CountError {
    pub fn unreadable(reason: impl ToString) -> Self {
        Self::UnreadableSource {
            reason: reason.to_string(),
        }
    }

    pub fn tokenization(encoding: Encoding, reason: impl ToString) -> Self {
        Self::Tokenization {
            encoding,
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_model_names_input() {
        let err = CountError::UnknownModel {
            model: "not-a-real-model".into(),
        };
        assert_eq!(err.to_string(), "Model 'not-a-real-model' not found");
    }

    #[test]
    fn test_unreadable_message() {
        let err = CountError::unreadable("binary file detected");
        assert_eq!(err.to_string(), "binary file detected");
    }

    #[test]
    fn test_tokenization_message_names_encoding() {
        let err = CountError::tokenization(Encoding::P50kEdit, "bad vocab");
        assert_eq!(err.to_string(), "p50k_edit tokenizer failed: bad vocab");
    }
}
