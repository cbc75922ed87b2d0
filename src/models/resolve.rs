//! Model resolution logic for countgpt.
//!
//! Maps a `--model` value to an [`Encoding`]. Precedence:
//!   1. a base encoding name (`cl100k_base`) is used as-is
//!   2. an exact alias from the model table (`gpt-4`, `sonnet`)
//!   3. the longest family prefix that matches (`gpt-4o-` for `gpt-4o-mini`)
//!
//! Anything else is an [`CountError::UnknownModel`]; there is no fallback.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::encoding::Encoding;
use super::table::{ModelAlias, ModelPrefix, MODEL_ALIASES, MODEL_PREFIXES};
use crate::error::CountError;

/// Which rule produced a [`Resolution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The input was already an encoding name.
    Encoding,
    /// The input matched an alias exactly.
    Alias,
    /// The input started with this family prefix.
    Prefix(&'static str),
}

/// Resolved model: what was asked for and the encoding to count with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The model string as given, untrimmed.
    pub requested: String,
    pub encoding: Encoding,
    pub matched: MatchKind,
}

impl Resolution {
    /// Whether the user named an encoding directly rather than a model.
    pub fn is_encoding(&self) -> bool {
        self.matched == MatchKind::Encoding
    }
}

static ALIAS_INDEX: LazyLock<HashMap<&'static str, &'static ModelAlias>> = LazyLock::new(|| {
    MODEL_ALIASES
        .iter()
        .map(|alias| (alias.name, alias))
        .collect()
});

/// Resolve a model name, shorthand, or encoding name to an [`Encoding`].
///
/// Matching ignores case and surrounding whitespace.
pub fn resolve_model(input: &str) -> Result<Resolution, CountError> {
    let normalized = input.trim().to_lowercase();

    let (encoding, matched) = if let Some(encoding) = Encoding::from_name(&normalized) {
        (encoding, MatchKind::Encoding)
    } else if let Some(alias) = ALIAS_INDEX.get(normalized.as_str()) {
        (alias.encoding, MatchKind::Alias)
    } else if let Some(family) = longest_prefix(&normalized) {
        (family.encoding, MatchKind::Prefix(family.prefix))
    } else {
        return Err(CountError::UnknownModel {
            model: input.to_string(),
        });
    };

    tracing::debug!(model = input, %encoding, ?matched, "resolved model");
    Ok(Resolution {
        requested: input.to_string(),
        encoding,
        matched,
    })
}

fn longest_prefix(name: &str) -> Option<&'static ModelPrefix> {
    MODEL_PREFIXES
        .iter()
        .filter(|family| name.starts_with(family.prefix))
        .max_by_key(|family| family.prefix.len())
}
