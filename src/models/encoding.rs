//! Tokenizer encoding enumeration.
//!
//! Defines [`Encoding`], the closed set of BPE schemes a model can resolve
//! to. Each variant is also the key used to load the tokenizer.

use std::fmt;

/// A base BPE encoding understood by the tokenizer library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// GPT-2 (shares the r50k vocabulary).
    Gpt2,
    /// GPT-3 base models (davinci, curie, babbage, ada).
    R50kBase,
    /// Codex and text-davinci-002/003.
    P50kBase,
    /// Edit models.
    P50kEdit,
    /// GPT-3.5, GPT-4 and the current embedding models.
    Cl100kBase,
    /// GPT-4o, o1 and o3.
    O200kBase,
}

impl Encoding {
    /// Every encoding, oldest first.
    pub const ALL: [Encoding; 6] = [
        Encoding::Gpt2,
        Encoding::R50kBase,
        Encoding::P50kBase,
        Encoding::P50kEdit,
        Encoding::Cl100kBase,
        Encoding::O200kBase,
    ];

    /// Identifier as written on the command line, e.g. `cl100k_base`.
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::Gpt2 => "gpt2",
            Encoding::R50kBase => "r50k_base",
            Encoding::P50kBase => "p50k_base",
            Encoding::P50kEdit => "p50k_edit",
            Encoding::Cl100kBase => "cl100k_base",
            Encoding::O200kBase => "o200k_base",
        }
    }

    /// Looks up an encoding by its exact identifier.
    ///
    /// The caller is expected to have trimmed and lowercased `name`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.name() == name)
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
