use super::resolve::MatchKind;
use super::table::{ModelGroup, MODEL_ALIASES, MODEL_PREFIXES};
use super::*;
use crate::error::CountError;
use std::collections::HashSet;

const DOCUMENTED: &[(&str, &str)] = &[
    ("claude-3-opus", "o200k_base"),
    ("claude-3-sonnet", "o200k_base"),
    ("claude-3-haiku", "o200k_base"),
    ("claude-3", "o200k_base"),
    ("claude-2", "o200k_base"),
    ("claude-2.0", "o200k_base"),
    ("claude-2.1", "o200k_base"),
    ("claude-instant", "o200k_base"),
    ("gpt-4o", "o200k_base"),
    ("gpt-4-turbo", "cl100k_base"),
    ("gpt-4", "cl100k_base"),
    ("gpt-3.5-turbo", "cl100k_base"),
    ("gpt-3.5", "cl100k_base"),
    ("gpt-35-turbo", "cl100k_base"),
    ("o1", "o200k_base"),
    ("o3", "o200k_base"),
    ("davinci-002", "cl100k_base"),
    ("babbage-002", "cl100k_base"),
    ("text-embedding-ada-002", "cl100k_base"),
    ("text-embedding-3-small", "cl100k_base"),
    ("text-embedding-3-large", "cl100k_base"),
    ("4o", "o200k_base"),
    ("4", "cl100k_base"),
    ("3.5", "cl100k_base"),
    ("chatgpt", "cl100k_base"),
    ("claude", "o200k_base"),
    ("opus", "o200k_base"),
    ("sonnet", "o200k_base"),
    ("haiku", "o200k_base"),
    ("text-davinci-003", "p50k_base"),
    ("text-davinci-002", "p50k_base"),
    ("text-davinci-001", "r50k_base"),
    ("text-curie-001", "r50k_base"),
    ("text-babbage-001", "r50k_base"),
    ("text-ada-001", "r50k_base"),
    ("davinci", "r50k_base"),
    ("curie", "r50k_base"),
    ("babbage", "r50k_base"),
    ("ada", "r50k_base"),
    ("code-davinci-002", "p50k_base"),
    ("code-davinci-001", "p50k_base"),
    ("code-cushman-002", "p50k_base"),
    ("code-cushman-001", "p50k_base"),
    ("davinci-codex", "p50k_base"),
    ("cushman-codex", "p50k_base"),
    ("text-davinci-edit-001", "p50k_edit"),
    ("code-davinci-edit-001", "p50k_edit"),
    ("text-similarity-davinci-001", "r50k_base"),
    ("text-similarity-curie-001", "r50k_base"),
    ("text-similarity-babbage-001", "r50k_base"),
    ("text-similarity-ada-001", "r50k_base"),
    ("text-search-davinci-doc-001", "r50k_base"),
    ("text-search-curie-doc-001", "r50k_base"),
    ("text-search-babbage-doc-001", "r50k_base"),
    ("text-search-ada-doc-001", "r50k_base"),
    ("code-search-babbage-code-001", "r50k_base"),
    ("code-search-ada-code-001", "r50k_base"),
    ("gpt-2", "gpt2"),
];

fn encoding_of(model: &str) -> &'static str {
    resolve_model(model).unwrap().encoding.name()
}

#[test]
fn test_every_documented_alias() {
    for (model, expected) in DOCUMENTED {
        let resolution = resolve_model(model).unwrap();
        assert_eq!(resolution.encoding.name(), *expected, "alias {model}");
        assert_eq!(resolution.matched, MatchKind::Alias, "alias {model}");
    }
}

#[test]
fn test_documented_list_covers_table() {
    assert_eq!(DOCUMENTED.len(), MODEL_ALIASES.len());
    for alias in MODEL_ALIASES {
        assert!(
            DOCUMENTED.iter().any(|(name, _)| *name == alias.name),
            "{} is not documented",
            alias.name
        );
    }
}

#[test]
fn test_alias_names_unique_and_normalized() {
    let mut seen = HashSet::new();
    for alias in MODEL_ALIASES {
        assert!(seen.insert(alias.name), "duplicate alias {}", alias.name);
        assert_eq!(alias.name, alias.name.trim().to_lowercase());
        assert!(Encoding::from_name(alias.name).is_none(), "{} shadows an encoding", alias.name);
    }
}

#[test]
fn test_case_and_whitespace_insensitive() {
    let plain = resolve_model("gpt-4").unwrap();
    let upper = resolve_model("GPT-4").unwrap();
    let padded = resolve_model(" gpt-4 ").unwrap();
    assert_eq!(plain.encoding, upper.encoding);
    assert_eq!(plain.encoding, padded.encoding);
    assert_eq!(padded.matched, MatchKind::Alias);
    assert_eq!(padded.requested, " gpt-4 ");
}

#[test]
fn test_base_encodings_resolve_to_themselves() {
    for encoding in Encoding::ALL {
        let resolution = resolve_model(encoding.name()).unwrap();
        assert_eq!(resolution.encoding, encoding);
        assert!(resolution.is_encoding());
    }
    assert_eq!(encoding_of("CL100K_BASE"), "cl100k_base");
}

#[test]
fn test_unknown_model() {
    let err = resolve_model("not-a-real-model").unwrap_err();
    assert_eq!(
        err,
        CountError::UnknownModel {
            model: "not-a-real-model".into()
        }
    );
}

#[test]
fn test_empty_model_is_unknown() {
    assert!(resolve_model("").is_err());
    assert!(resolve_model("   ").is_err());
}

#[test]
fn test_prefix_fallback() {
    let resolution = resolve_model("gpt-4-xyz").unwrap();
    assert_eq!(resolution.encoding, Encoding::Cl100kBase);
    assert_eq!(resolution.matched, MatchKind::Prefix("gpt-4-"));

    assert_eq!(encoding_of("gpt-4-0314"), "cl100k_base");
    assert_eq!(encoding_of("gpt-3.5-turbo-0301"), "cl100k_base");
    assert_eq!(encoding_of("gpt-35-turbo-16k"), "cl100k_base");
    assert_eq!(encoding_of("o1-preview"), "o200k_base");
    assert_eq!(encoding_of("o3-mini"), "o200k_base");
    assert_eq!(encoding_of("claude-3-5-sonnet-20240620"), "o200k_base");
    assert_eq!(encoding_of("ft:davinci-002:acme::abc"), "cl100k_base");
}

#[test]
fn test_longest_prefix_wins() {
    // "ft:gpt-4" also matches; the longer "ft:gpt-4o" must win.
    let resolution = resolve_model("ft:gpt-4o-mini:acme::xyz").unwrap();
    assert_eq!(resolution.matched, MatchKind::Prefix("ft:gpt-4o"));
    assert_eq!(resolution.encoding, Encoding::O200kBase);

    let resolution = resolve_model("ft:gpt-4-0613:acme::xyz").unwrap();
    assert_eq!(resolution.matched, MatchKind::Prefix("ft:gpt-4"));
    assert_eq!(resolution.encoding, Encoding::Cl100kBase);

    assert_eq!(encoding_of("gpt-4o-2024-05-13"), "o200k_base");
    assert_eq!(encoding_of("chatgpt-4o-latest"), "o200k_base");
}

#[test]
fn test_alias_beats_prefix() {
    // "gpt-4-turbo" also starts with "gpt-4-".
    assert_eq!(resolve_model("gpt-4-turbo").unwrap().matched, MatchKind::Alias);
}

#[test]
fn test_prefixes_unique() {
    let mut seen = HashSet::new();
    for family in MODEL_PREFIXES {
        assert!(seen.insert(family.prefix), "duplicate prefix {}", family.prefix);
    }
}

#[test]
fn test_listing_names_every_alias_once() {
    let mut out = Vec::new();
    list_models(&mut out).unwrap();
    let listing = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = listing.lines().collect();

    for alias in MODEL_ALIASES {
        let entry = format!("  {} (uses {})", alias.name, alias.encoding);
        let hits = lines.iter().filter(|line| **line == entry).count();
        assert_eq!(hits, 1, "{entry:?}");
    }
    for encoding in Encoding::ALL {
        assert!(lines.iter().any(|line| line.trim_start().starts_with(encoding.name())));
    }
    assert!(listing.contains("cl100k_base (default)"));
}

#[test]
fn test_listing_groups_in_order() {
    let mut out = Vec::new();
    list_models(&mut out).unwrap();
    let listing = String::from_utf8(out).unwrap();

    let mut last = 0;
    for group in ModelGroup::ALL {
        let at = listing.find(group.title()).unwrap();
        assert!(at >= last, "{} out of order", group.title());
        last = at;
    }
    assert!(listing.contains("  gpt-4o-* (uses o200k_base)"));
}
