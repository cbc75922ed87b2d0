//! Output rendering for countgpt.
//!
//! Defines the [`Renderer`] trait that decouples counting from display.
//! [`CountRenderer`] prints plain or verbose counts, [`JsonRenderer`] prints
//! one JSON object per source, and [`VisualRenderer`] prints the colored
//! token dump. Failed sources are written separately via
//! [`render_source_error`].

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;

use crate::constants::STDIN_VERBOSE_LABEL;
use crate::error::CountError;
use crate::models::Resolution;
use crate::report::{Counted, SourceReport, Tally};
use crate::visualize::render_spans;

/// Trait for rendering counted sources.
pub trait Renderer {
    /// Render one successfully counted source.
    fn render_source(&mut self, report: &SourceReport, counted: &Counted) -> io::Result<()>;

    /// Called once after every source has been processed.
    fn render_done(&mut self, tally: &Tally) -> io::Result<()>;
}

/// Renders `<label>: <count>` lines, or a block per source when verbose.
pub struct CountRenderer<'a, W: Write> {
    out: W,
    resolution: &'a Resolution,
    verbose: bool,
    show_labels: bool,
}

impl<'a, W: Write> CountRenderer<'a, W> {
    pub fn new(out: W, resolution: &'a Resolution, verbose: bool, show_labels: bool) -> Self {
        Self {
            out,
            resolution,
            verbose,
            show_labels,
        }
    }
}

/// `Model: <requested>`, naming the encoding when a model alias was given.
fn model_line(resolution: &Resolution) -> String {
    let requested = resolution.requested.trim();
    if resolution.is_encoding() {
        format!("Model: {requested}")
    } else {
        format!("Model: {requested} (using {} tokenizer)", resolution.encoding)
    }
}

impl<W: Write> Renderer for CountRenderer<'_, W> {
    fn render_source(&mut self, report: &SourceReport, counted: &Counted) -> io::Result<()> {
        let tokens = counted.result.token_count();
        if self.verbose {
            let heading = if report.source.is_stdin() {
                STDIN_VERBOSE_LABEL.to_string()
            } else {
                report.label()
            };
            writeln!(self.out, "{heading}:")?;
            writeln!(self.out, "  {}", model_line(self.resolution))?;
            writeln!(self.out, "  Token count: {tokens}")?;
            writeln!(self.out, "  Character count: {}", counted.result.characters)?;
        } else if self.show_labels {
            writeln!(self.out, "{}: {tokens}", report.label())?;
        } else {
            writeln!(self.out, "{tokens}")?;
        }
        Ok(())
    }

    fn render_done(&mut self, tally: &Tally) -> io::Result<()> {
        if tally.sources > 1 {
            let total = tally.total_tokens;
            if self.verbose {
                writeln!(self.out, "Total tokens across all files: {total}")?;
            } else {
                writeln!(self.out, "Total: {total}")?;
            }
        }
        self.out.flush()
    }
}

#[derive(Serialize)]
struct JsonLine<'a> {
    source: &'a str,
    model: &'a str,
    encoding: &'static str,
    tokens: usize,
    characters: usize,
}

/// Renders one JSON object per line for each counted source.
pub struct JsonRenderer<'a, W: Write> {
    out: W,
    resolution: &'a Resolution,
}

impl<'a, W: Write> JsonRenderer<'a, W> {
    pub fn new(out: W, resolution: &'a Resolution) -> Self {
        Self { out, resolution }
    }
}

impl<W: Write> Renderer for JsonRenderer<'_, W> {
    fn render_source(&mut self, report: &SourceReport, counted: &Counted) -> io::Result<()> {
        let label = report.label();
        let line = JsonLine {
            source: &label,
            model: self.resolution.requested.trim(),
            encoding: self.resolution.encoding.name(),
            tokens: counted.result.token_count(),
            characters: counted.result.characters,
        };
        serde_json::to_writer(&mut self.out, &line)?;
        writeln!(self.out)
    }

    fn render_done(&mut self, _tally: &Tally) -> io::Result<()> {
        self.out.flush()
    }
}

/// Renders the header and colored token spans of each source. Verbose adds
/// the model line above the header.
pub struct VisualRenderer<'a, W: Write> {
    out: W,
    resolution: &'a Resolution,
    verbose: bool,
    show_labels: bool,
}

impl<'a, W: Write> VisualRenderer<'a, W> {
    pub fn new(out: W, resolution: &'a Resolution, verbose: bool, show_labels: bool) -> Self {
        Self {
            out,
            resolution,
            verbose,
            show_labels,
        }
    }
}

impl<W: Write> Renderer for VisualRenderer<'_, W> {
    fn render_source(&mut self, report: &SourceReport, counted: &Counted) -> io::Result<()> {
        if self.show_labels {
            writeln!(self.out, "{}:", report.label())?;
        }
        if self.verbose {
            writeln!(self.out, "{}", model_line(self.resolution))?;
        }
        writeln!(
            self.out,
            "Tokens: {}        Characters: {}",
            counted.result.token_count(),
            counted.result.characters
        )?;
        writeln!(self.out)?;
        let spans = counted.spans.as_deref().unwrap_or_default();
        writeln!(self.out, "{}", render_spans(spans))?;
        writeln!(self.out)
    }

    fn render_done(&mut self, _tally: &Tally) -> io::Result<()> {
        self.out.flush()
    }
}

/// Write a diagnostic line for a failed invocation.
pub fn render_error(err: &mut impl Write, error: &CountError) -> io::Result<()> {
    writeln!(err, "{} {}", "error:".red().bold(), error)
}

/// Write `error: <label>: <reason>` for a source that could not be counted.
pub fn render_source_error(err: &mut impl Write, label: &str, error: &CountError) -> io::Result<()> {
    writeln!(err, "{} {label}: {error}", "error:".red().bold())
}
