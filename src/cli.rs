//! Command-line interface definition and dispatch for countgpt.
//!
//! Uses [`clap`] for argument parsing with derive macros. [`run`] resolves
//! the model once, processes every source, renders the reports, and turns
//! them into the process exit status.

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{CommandFactory, Parser, ValueEnum};

use crate::constants::{APP_NAME, DEFAULT_MODEL};
use crate::models::{list_models, resolve_model};
use crate::output::{
    render_error, render_source_error, CountRenderer, JsonRenderer, Renderer, VisualRenderer,
};
use crate::report::{process_source, Tally};
use crate::source::Source;
use crate::tokens::Tiktoken;

/// Exit status when there is nothing to read: no files and an interactive stdin.
const EXIT_USAGE: u8 = 2;

/// Top-level CLI structure for countgpt.
///
/// The `///` doc comments on fields double as `--help` text rendered by clap.
#[derive(Parser, Debug)]
#[command(
    name = APP_NAME,
    version,
    about = "Count tokens in text files or from standard input",
    long_about = "Count tokens in text files or from standard input.\n\n\
        --model accepts a tiktoken encoding (cl100k_base) or a model name \
        (gpt-4, claude-3-opus, 4o, sonnet).",
    after_help = "Examples:\n  countgpt file.txt\n  countgpt file1.txt file2.md\n  \
        countgpt --model gpt-4 file.txt\n  cat file.txt | countgpt"
)]
pub struct Cli {
    /// Files to count; reads standard input when omitted (`-` also means stdin)
    pub files: Vec<PathBuf>,

    /// Tokenizer encoding or model name
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Show model, token count, and character count per source
    #[arg(short, long)]
    pub verbose: bool,

    /// List all supported models and exit
    #[arg(short, long)]
    pub list_models: bool,

    /// Color each token to show token boundaries
    #[arg(short = 'c', long)]
    pub visualize: bool,

    /// Print one JSON object per source
    #[arg(long, conflicts_with_all = ["verbose", "visualize"])]
    pub json: bool,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

/// Color policy for terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when writing to a terminal and `NO_COLOR` is unset
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn apply(self) {
        match self {
            ColorChoice::Auto => {}
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
        }
    }
}

/// Parses command-line arguments into a [`Cli`] struct.
///
/// Delegates to [`clap::Parser::parse`], which exits the process on invalid input.
pub fn parse() -> Cli {
    Cli::parse()
}

/// Runs one invocation and returns its exit status.
///
/// An unknown model or a tokenizer that fails to load stops before any
/// source is read. Each source is rendered as soon as it is counted, so
/// only running totals outlive it. Per-source failures are reported and
/// counted against the exit status, but the remaining sources are still
/// processed.
pub fn run(cli: Cli) -> Result<ExitCode> {
    cli.color.apply();
    let mut stderr = io::stderr();

    if cli.list_models {
        let mut stdout = io::stdout().lock();
        list_models(&mut stdout)?;
        stdout.flush()?;
        return Ok(ExitCode::SUCCESS);
    }

    let resolution = match resolve_model(&cli.model) {
        Ok(resolution) => resolution,
        Err(e) => {
            render_error(&mut stderr, &e)?;
            writeln!(stderr, "Use --list-models to see available options.")?;
            return Ok(ExitCode::FAILURE);
        }
    };

    if cli.files.is_empty() && io::stdin().is_terminal() {
        Cli::command().write_help(&mut stderr)?;
        return Ok(ExitCode::from(EXIT_USAGE));
    }

    let encoder = match Tiktoken::load(resolution.encoding) {
        Ok(encoder) => encoder,
        Err(e) => {
            render_error(&mut stderr, &e)?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let sources = Source::from_args(&cli.files);
    let show_labels = !(sources.len() == 1 && sources[0].is_stdin());

    let visualize = cli.visualize && colored::control::SHOULD_COLORIZE.should_colorize();
    if cli.visualize && !visualize {
        tracing::warn!("colors are disabled, printing token counts only");
    }

    let stdout = io::stdout().lock();
    let mut renderer: Box<dyn Renderer + '_> = if cli.json {
        Box::new(JsonRenderer::new(stdout, &resolution))
    } else if visualize {
        Box::new(VisualRenderer::new(stdout, &resolution, cli.verbose, show_labels))
    } else {
        Box::new(CountRenderer::new(stdout, &resolution, cli.verbose, show_labels))
    };

    let mut tally = Tally::default();
    for source in sources {
        let report = process_source(source, &encoder, visualize);
        match &report.outcome {
            Ok(counted) => renderer.render_source(&report, counted)?,
            Err(e) => render_source_error(&mut stderr, &report.label(), e)?,
        }
        tally.record(&report);
    }
    renderer.render_done(&tally)?;

    Ok(tally.exit_code())
}
