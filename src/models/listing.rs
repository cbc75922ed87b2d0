//! Model listing for `--list-models`.
//!
//! Prints base encodings, every alias grouped by [`ModelGroup`], and the
//! family prefixes. Walks the same table the resolver indexes.

use std::io::{self, Write};

use colored::Colorize;

use super::encoding::Encoding;
use super::table::{aliases_in, ModelGroup, MODEL_PREFIXES};
use crate::constants::DEFAULT_MODEL;

/// Write all known encodings, aliases, and prefixes, grouped by provider.
pub fn list_models(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "Tokenizer encodings:".bold())?;
    for encoding in Encoding::ALL {
        let marker = if encoding.name() == DEFAULT_MODEL { " (default)" } else { "" };
        writeln!(out, "  {encoding}{marker}")?;
    }

    for group in ModelGroup::ALL {
        writeln!(out)?;
        writeln!(out, "{}", format!("{}:", group.title()).bold())?;
        for alias in aliases_in(group) {
            writeln!(out, "  {} (uses {})", alias.name, alias.encoding)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", "Model families (prefix match):".bold())?;
    for family in MODEL_PREFIXES {
        writeln!(out, "  {}* (uses {})", family.prefix, family.encoding)?;
    }

    Ok(())
}
