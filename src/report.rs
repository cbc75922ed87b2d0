//! Per-source processing and outcome collection.
//!
//! Every source goes through the same steps (read, tokenize, optionally
//! split into spans) and ends up as a [`SourceReport`]. Failures stay
//! attached to their source. A report is rendered and dropped right away;
//! only its counts survive in a [`Tally`], which yields the total and the
//! exit status.

use std::process::ExitCode;

use crate::error::CountError;
use crate::source::{read_source, Source};
use crate::tokens::{count, TokenEncoder, TokenizationResult};
use crate::visualize::{token_spans, TokenSpan};

/// A successfully counted source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counted {
    pub result: TokenizationResult,
    /// Present when visualization was requested.
    pub spans: Option<Vec<TokenSpan>>,
}

/// Outcome for one input source.
#[derive(Debug)]
pub struct SourceReport {
    pub source: Source,
    pub outcome: Result<Counted, CountError>,
}

impl SourceReport {
    pub fn label(&self) -> String {
        self.source.label()
    }

    pub fn token_count(&self) -> Option<usize> {
        self.outcome.as_ref().ok().map(|c| c.result.token_count())
    }
}

/// Read and tokenize one source. Never fails as a whole: errors are kept
/// in the report.
pub fn process_source(source: Source, encoder: &dyn TokenEncoder, with_spans: bool) -> SourceReport {
    let outcome = read_source(&source).and_then(|text| count_text(encoder, &text, with_spans));

    match &outcome {
        Ok(counted) => tracing::debug!(
            source = %source.label(),
            encoding = %encoder.encoding(),
            tokens = counted.result.token_count(),
            "counted source"
        ),
        Err(e) => tracing::debug!(source = %source.label(), error = %e, "source failed"),
    }

    SourceReport { source, outcome }
}

/// Tokenize text that has already been read.
pub fn count_text(
    encoder: &dyn TokenEncoder,
    text: &str,
    with_spans: bool,
) -> Result<Counted, CountError> {
    let result = count(encoder, text);
    let spans = if with_spans {
        Some(token_spans(encoder, &result.tokens)?)
    } else {
        None
    };
    Ok(Counted { result, spans })
}

/// Counts kept across sources once their reports have been rendered.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub sources: usize,
    pub failed: usize,
    /// Sum of tokens over the sources that succeeded.
    pub total_tokens: usize,
}

impl Tally {
    pub fn record(&mut self, report: &SourceReport) {
        self.sources += 1;
        match report.token_count() {
            Some(tokens) => self.total_tokens += tokens,
            None => self.failed += 1,
        }
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    /// `SUCCESS` only if every source was counted.
    pub fn exit_code(&self) -> ExitCode {
        if self.all_succeeded() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}
