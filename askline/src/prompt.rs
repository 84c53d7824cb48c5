//! # Prompting
//!
//! Single-line, validated, and multiline prompting on top of
//! [`Terminal`]. All three loop or accumulate locally and hold no state
//! between calls.
//!
//! ## Examples
//!
//! ### Validated input
//! ```rust,no_run
//! use askline::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//!
//! // Any Err from the validator rejects the answer and asks again.
//! let port = terminal
//!     .valid_prompt("Port to listen on:", |answer| {
//!         answer.trim().parse::<u16>().map(|_| ())
//!     })
//!     .unwrap();
//! println!("Accepted: {}", port);
//! ```
//!
//! ### Multiline input
//! ```rust,no_run
//! use askline::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! let body = terminal.multiline_prompt("Describe the problem").unwrap();
//! println!("{} bytes captured", body.len());
//! ```

use std::io::{BufRead, Write};

use log::debug;

use crate::error::TerminalError;
use crate::terminal::Terminal;

/// The line that ends multiline input when typed on its own.
pub const DEFAULT_SENTINEL: &str = "..";

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Prompts the operator for one line of input.
    ///
    /// If `text` does not already end in a space, tab, or newline, a single
    /// space is appended so the typed response is visually separated from
    /// the prompt. The response is returned exactly as typed, untrimmed.
    pub fn prompt(&mut self, text: &str) -> Result<String, TerminalError> {
        if text.ends_with([' ', '\t', '\n']) {
            self.read_line(Some(text))
        } else {
            // give space for the operator's response
            self.read_line(Some(&format!("{} ", text)))
        }
    }

    /// Prompts repeatedly until `validator` accepts the response.
    ///
    /// The validator may fail with any error type; every failure is treated
    /// the same way, as "invalid": the detail is discarded, a fixed
    /// rejection line is shown, and the prompt is repeated. There is no
    /// retry cap, so the loop ends only on an accepted response or on
    /// cancellation.
    pub fn valid_prompt<V, E>(&mut self, text: &str, mut validator: V) -> Result<String, TerminalError>
    where
        V: FnMut(&str) -> Result<(), E>,
    {
        loop {
            let answer = self.prompt(text)?;
            match validator(&answer) {
                Ok(()) => return Ok(answer),
                Err(_) => {
                    debug!("rejected response {:?}", answer);
                    self.show("That was not a valid response.")?;
                }
            }
        }
    }

    /// Prompts for input spanning multiple lines, ended by
    /// [`DEFAULT_SENTINEL`] on a line of its own.
    pub fn multiline_prompt(&mut self, text: &str) -> Result<String, TerminalError> {
        self.multiline_prompt_with(text, DEFAULT_SENTINEL)
    }

    /// Prompts for input spanning multiple lines, ended by `sentinel` on a
    /// line of its own. The prompt tells the operator how to finish.
    ///
    /// Lines before the sentinel are joined with `\n`; the final trailing
    /// newline is stripped, so a session whose first line is the sentinel
    /// returns the empty string.
    ///
    /// An empty `sentinel` means a blank line ends input: the enter that
    /// submits the last content line plus one more enter, which is how the
    /// help line phrases it.
    pub fn multiline_prompt_with(
        &mut self,
        text: &str,
        sentinel: &str,
    ) -> Result<String, TerminalError> {
        let mut full_prompt = String::from(text);
        if !full_prompt.ends_with('\n') {
            // give space for the operator's response
            full_prompt.push('\n');
        }
        if sentinel.is_empty() {
            full_prompt.push_str("(To finish, press enter twice.)\n");
        } else {
            full_prompt.push_str(&format!(
                "(To finish, type '{}' on a line by itself and press enter.)\n",
                sentinel
            ));
        }

        let mut collected = String::new();
        let mut line = self.read_line(Some(&full_prompt))?;
        while line != sentinel {
            collected.push_str(&line);
            collected.push('\n');
            line = self.read_line(None)?;
        }

        // take off the trailing newline
        collected.pop();
        Ok(collected)
    }
}
