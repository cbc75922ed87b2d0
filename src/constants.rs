//! Centralized constants for countgpt.
//!
//! Default strings, limits, and the visualization palette live here so they
//! can be changed in one place.

/// Application name used in CLI output.
pub const APP_NAME: &str = "countgpt";

/// Encoding used when `--model` is not given (GPT-3.5 / GPT-4 chat models).
pub const DEFAULT_MODEL: &str = "cl100k_base";

/// Label used for standard input in default and error output.
pub const STDIN_LABEL: &str = "stdin";

/// Label used for standard input in verbose output.
pub const STDIN_VERBOSE_LABEL: &str = "Stdin (piped input)";

/// File argument that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Byte threshold for binary file detection (check first N bytes for null).
pub const BINARY_DETECTION_BYTES: usize = 8192;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// --- Visualization ---

/// Background colors cycled across consecutive tokens, as xterm-256 palette
/// indices. Indexed colors render the same with or without truecolor support.
pub const TOKEN_PALETTE: [u8; 15] = [
    153, 184, 214, 209, 183, 157, 156, 147, 146, 218, 222, 229, 193, 157, 122,
];
