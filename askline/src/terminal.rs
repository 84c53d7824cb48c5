//! # Terminal I/O
//!
//! This module provides the [`Terminal`] type, the single point through
//! which every prompt in this crate reads and writes. A `Terminal` owns a
//! line-oriented input handle and a display handle; the prompting
//! operations and the menu flow are built entirely on its two primitives,
//! [`Terminal::read_line`] and [`Terminal::show`].
//!
//! ## Features
//! - End-of-input is normalized into a single cancellation signal,
//!   [`TerminalError::Cancelled`], so callers never see a bare empty read.
//! - Input and output handles are injected, so a session can be scripted
//!   from a buffer in tests.
//! - No state is kept between calls; every operation is self-contained.
//!
//! ## Example
//!
//! ```rust,no_run
//! use askline::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! let line = terminal.read_line(Some("> ")).unwrap();
//! terminal.show(&format!("you typed: {}", line)).unwrap();
//! ```

use std::io::{self, BufRead, Write};

use crate::error::TerminalError;

/// A line-oriented terminal session over an injected reader and writer.
///
/// The canonical pairing is [`Terminal::stdio`]. Tests construct one over
/// an in-memory cursor and a byte buffer instead:
///
/// ```rust
/// use std::io::Cursor;
/// use askline::Terminal;
///
/// let mut output = Vec::new();
/// let mut terminal = Terminal::new(Cursor::new(&b"hello\n"[..]), &mut output);
/// assert_eq!(terminal.read_line(None).unwrap(), "hello");
/// ```
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    /// Creates a terminal over the process's standard input and output.
    pub fn stdio() -> Self {
        Terminal {
            input: io::stdin().lock(),
            output: io::stdout(),
        }
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Creates a terminal over an arbitrary reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Terminal { input, output }
    }

    /// Displays `prompt` (if given) without a trailing newline, then blocks
    /// until one line of input arrives. The line is returned with its
    /// terminator stripped.
    ///
    /// # Errors
    /// Returns [`TerminalError::Cancelled`] when the input stream has ended;
    /// the operator closing input and the operator interrupting are treated
    /// as the same signal. Callers must propagate it, never retry it.
    pub fn read_line(&mut self, prompt: Option<&str>) -> Result<String, TerminalError> {
        if let Some(text) = prompt {
            write!(self.output, "{}", text)?;
            self.output.flush()?;
        }

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(TerminalError::Cancelled);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    /// Writes one rendered unit (a line or a multi-line block) followed by
    /// a newline.
    ///
    /// # Errors
    /// A failing output stream is fatal and returns [`TerminalError::Io`].
    pub fn show(&mut self, text: &str) -> Result<(), TerminalError> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }
}
