//! Centralized model table for countgpt.
//!
//! Defines every known model alias with the encoding it uses, plus the
//! family prefixes tried when no alias matches. This is the single source
//! of truth: both `resolve.rs` (lookup) and `listing.rs` (the
//! `--list-models` output) consume from here.

use super::encoding::Encoding;
use super::encoding::Encoding::{Cl100kBase, Gpt2, O200kBase, P50kBase, P50kEdit, R50kBase};
use self::ModelGroup::{Anthropic, Legacy, OpenAI, OpenSource, Shorthand};

/// Provider or family heading an alias is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelGroup {
    /// Claude models.
    Anthropic,
    /// Current OpenAI chat, reasoning, and embedding models.
    OpenAI,
    /// Short names for quick access.
    Shorthand,
    /// Deprecated OpenAI completion, code, edit, and search models.
    Legacy,
    /// Openly released models.
    OpenSource,
}

impl ModelGroup {
    /// Listing order.
    pub const ALL: [ModelGroup; 5] = [
        ModelGroup::Anthropic,
        ModelGroup::OpenAI,
        ModelGroup::Shorthand,
        ModelGroup::Legacy,
        ModelGroup::OpenSource,
    ];

    /// Section heading used by `--list-models`.
    pub fn title(&self) -> &'static str {
        match self {
            ModelGroup::Anthropic => "Anthropic models",
            ModelGroup::OpenAI => "OpenAI models",
            ModelGroup::Shorthand => "Shorthands",
            ModelGroup::Legacy => "Deprecated OpenAI models",
            ModelGroup::OpenSource => "Open source models",
        }
    }
}

/// A recognized model name and the encoding it maps to.
#[derive(Debug)]
pub struct ModelAlias {
    /// Lowercase model name or shorthand (e.g., "claude-3-opus").
    pub name: &'static str,
    /// Encoding the model tokenizes with.
    pub encoding: Encoding,
    /// Heading the alias is listed under.
    pub group: ModelGroup,
}

/// A model family matched by leading substring.
#[derive(Debug)]
pub struct ModelPrefix {
    /// Lowercase prefix (e.g., "gpt-4o-").
    pub prefix: &'static str,
    /// Encoding shared by the family.
    pub encoding: Encoding,
}

const fn alias(name: &'static str, encoding: Encoding, group: ModelGroup) -> ModelAlias {
    ModelAlias {
        name,
        encoding,
        group,
    }
}

const fn prefix(prefix: &'static str, encoding: Encoding) -> ModelPrefix {
    ModelPrefix { prefix, encoding }
}

/// Every known alias. Names are unique and lowercase.
pub const MODEL_ALIASES: &[ModelAlias] = &[
    // Claude does not publish its tokenizer; o200k_base is the closest match.
    alias("claude-3-opus", O200kBase, Anthropic),
    alias("claude-3-sonnet", O200kBase, Anthropic),
    alias("claude-3-haiku", O200kBase, Anthropic),
    alias("claude-3", O200kBase, Anthropic),
    alias("claude-2", O200kBase, Anthropic),
    alias("claude-2.0", O200kBase, Anthropic),
    alias("claude-2.1", O200kBase, Anthropic),
    alias("claude-instant", O200kBase, Anthropic),
    // chat
    alias("gpt-4o", O200kBase, OpenAI),
    alias("gpt-4-turbo", Cl100kBase, OpenAI),
    alias("gpt-4", Cl100kBase, OpenAI),
    alias("gpt-3.5-turbo", Cl100kBase, OpenAI),
    alias("gpt-3.5", Cl100kBase, OpenAI),
    alias("gpt-35-turbo", Cl100kBase, OpenAI),
    // reasoning
    alias("o1", O200kBase, OpenAI),
    alias("o3", O200kBase, OpenAI),
    // base
    alias("davinci-002", Cl100kBase, OpenAI),
    alias("babbage-002", Cl100kBase, OpenAI),
    // embeddings
    alias("text-embedding-ada-002", Cl100kBase, OpenAI),
    alias("text-embedding-3-small", Cl100kBase, OpenAI),
    alias("text-embedding-3-large", Cl100kBase, OpenAI),
    alias("4o", O200kBase, Shorthand),
    alias("4", Cl100kBase, Shorthand),
    alias("3.5", Cl100kBase, Shorthand),
    alias("chatgpt", Cl100kBase, Shorthand),
    alias("claude", O200kBase, Shorthand),
    alias("opus", O200kBase, Shorthand),
    alias("sonnet", O200kBase, Shorthand),
    alias("haiku", O200kBase, Shorthand),
    // text
    alias("text-davinci-003", P50kBase, Legacy),
    alias("text-davinci-002", P50kBase, Legacy),
    alias("text-davinci-001", R50kBase, Legacy),
    alias("text-curie-001", R50kBase, Legacy),
    alias("text-babbage-001", R50kBase, Legacy),
    alias("text-ada-001", R50kBase, Legacy),
    alias("davinci", R50kBase, Legacy),
    alias("curie", R50kBase, Legacy),
    alias("babbage", R50kBase, Legacy),
    alias("ada", R50kBase, Legacy),
    // code
    alias("code-davinci-002", P50kBase, Legacy),
    alias("code-davinci-001", P50kBase, Legacy),
    alias("code-cushman-002", P50kBase, Legacy),
    alias("code-cushman-001", P50kBase, Legacy),
    alias("davinci-codex", P50kBase, Legacy),
    alias("cushman-codex", P50kBase, Legacy),
    // edit
    alias("text-davinci-edit-001", P50kEdit, Legacy),
    alias("code-davinci-edit-001", P50kEdit, Legacy),
    // old embeddings
    alias("text-similarity-davinci-001", R50kBase, Legacy),
    alias("text-similarity-curie-001", R50kBase, Legacy),
    alias("text-similarity-babbage-001", R50kBase, Legacy),
    alias("text-similarity-ada-001", R50kBase, Legacy),
    alias("text-search-davinci-doc-001", R50kBase, Legacy),
    alias("text-search-curie-doc-001", R50kBase, Legacy),
    alias("text-search-babbage-doc-001", R50kBase, Legacy),
    alias("text-search-ada-doc-001", R50kBase, Legacy),
    alias("code-search-babbage-code-001", R50kBase, Legacy),
    alias("code-search-ada-code-001", R50kBase, Legacy),
    // `gpt2` itself is an encoding name and resolves before the table.
    alias("gpt-2", Gpt2, OpenSource),
];

/// Family prefixes. Order is irrelevant: the longest matching prefix wins.
pub const MODEL_PREFIXES: &[ModelPrefix] = &[
    prefix("o1-", O200kBase),
    prefix("o3-", O200kBase),
    prefix("chatgpt-4o-", O200kBase),
    prefix("gpt-4o-", O200kBase),
    prefix("gpt-4-", Cl100kBase),
    prefix("gpt-3.5-turbo-", Cl100kBase),
    // Azure deployment names
    prefix("gpt-35-turbo-", Cl100kBase),
    prefix("claude-", O200kBase),
    // fine-tuned
    prefix("ft:gpt-4o", O200kBase),
    prefix("ft:gpt-4", Cl100kBase),
    prefix("ft:gpt-3.5-turbo", Cl100kBase),
    prefix("ft:davinci-002", Cl100kBase),
    prefix("ft:babbage-002", Cl100kBase),
];

/// Aliases listed under `group`, in table order.
pub fn aliases_in(group: ModelGroup) -> impl Iterator<Item = &'static ModelAlias> {
    MODEL_ALIASES.iter().filter(move |a| a.group == group)
}
