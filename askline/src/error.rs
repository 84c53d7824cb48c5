//! Error types for terminal interactions.

use std::io;
use thiserror::Error;

/// Represents the ways a terminal interaction can fail.
///
/// Each variant is fatal to the operation that produced it:
/// - [`Cancelled`]: the input stream ended mid-interaction.
/// - [`EmptyOptions`]: a menu was requested with nothing to choose from.
/// - [`Io`]: the underlying stream failed to read or write.
///
/// Invalid responses (failed validation, unmatched or ambiguous option
/// text, out-of-range numbers) are never surfaced here; they are handled
/// inside the prompting loops by explaining the problem and asking again.
///
/// [`Cancelled`]: TerminalError::Cancelled
/// [`EmptyOptions`]: TerminalError::EmptyOptions
/// [`Io`]: TerminalError::Io
#[derive(Debug, Error)]
pub enum TerminalError {
    /// The operator ended input (end-of-stream or interrupt) during a read.
    #[error("input cancelled by end of input")]
    Cancelled,
    /// A menu was requested with an empty option list.
    #[error("cannot choose from an empty option list")]
    EmptyOptions,
    /// Reading from or writing to the terminal failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
}
