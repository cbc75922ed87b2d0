//! Token boundary visualization.
//!
//! Splits text into one span per token and paints consecutive spans with
//! cycling background colors so the boundaries are visible.

use colored::Colorize;

use crate::constants::TOKEN_PALETTE;
use crate::error::CountError;
use crate::tokens::{TokenEncoder, TokenId};

/// The text one token contributes to the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpan {
    pub token: TokenId,
    pub text: String,
}

/// Decode `tokens` into exactly one span each.
///
/// A token holding only part of a multi-byte character cannot be decoded
/// alone. Such tokens are decoded together with the tokens that follow
/// until the run is valid UTF-8; the run's text goes to its first token
/// and the rest get empty spans. Concatenating the spans therefore always
/// reproduces the decoded input.
pub fn token_spans(
    encoder: &dyn TokenEncoder,
    tokens: &[TokenId],
) -> Result<Vec<TokenSpan>, CountError> {
    let mut spans = Vec::with_capacity(tokens.len());
    let mut start = 0;

    for end in 1..=tokens.len() {
        let run = &tokens[start..end];
        match encoder.decode(run) {
            Ok(text) => {
                spans.push(TokenSpan {
                    token: run[0],
                    text,
                });
                spans.extend(run[1..].iter().map(|&token| TokenSpan {
                    token,
                    text: String::new(),
                }));
                start = end;
            }
            Err(e) if end == tokens.len() => return Err(e),
            Err(_) => {}
        }
    }

    Ok(spans)
}

/// Paint each span with the next palette color.
///
/// Whether escape codes are emitted follows `colored`'s global setting.
pub fn render_spans(spans: &[TokenSpan]) -> String {
    spans
        .iter()
        .enumerate()
        .map(|(i, span)| {
            tracing::trace!(token = span.token, text = ?span.text, "span");
            let background = TOKEN_PALETTE[i % TOKEN_PALETTE.len()];
            span.text
                .as_str()
                .on_ansi_color(background)
                .black()
                .to_string()
        })
        .collect()
}
