//! # Menu Choice
//!
//! Presents a numbered list of options and resolves free-form operator
//! input against it. Input is accepted as a 1-based number or as a prefix
//! of an option's text; an ambiguous prefix is reported with the matching
//! candidates instead of silently picking one.
//!
//! ## Example
//!
//! ```rust,no_run
//! use askline::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! let options = ["Scan target", "Show report", "Quit"];
//! let picked = terminal.choice(&options, Some("What next?")).unwrap();
//! println!("doing: {}", options[picked]);
//! ```

use std::io::{BufRead, Write};

use log::debug;

use crate::error::TerminalError;
use crate::terminal::Terminal;

const HEADER: &str = "Please choose one of the following options:";
const INPUT_PROMPT: &str = "Type the number or the option: ";

/// Why one attempt at picking an option was rejected. Local to the
/// resolution loop; the operator is told, the caller never is.
enum Rejection {
    /// No option's text starts with the input.
    NoMatch(String),
    /// Several options start with the input; holds their 0-based indices.
    Ambiguous(String, Vec<usize>),
    /// A number outside `1..=len`.
    OutOfRange,
}

impl Rejection {
    /// The explanation shown before the standard guidance line, if this
    /// rejection carries one.
    fn detail<S: AsRef<str>>(&self, options: &[S]) -> Option<String> {
        match self {
            Rejection::NoMatch(input) => Some(format!("No options begin with '{}'.", input)),
            Rejection::Ambiguous(input, matches) => {
                let mut message = format!(
                    "{} options begin with '{}', please be more specific:",
                    matches.len(),
                    input
                );
                for &index in matches {
                    message.push('\n');
                    message.push_str(&numbered_entry(index, options[index].as_ref()));
                }
                Some(message)
            }
            Rejection::OutOfRange => None,
        }
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    /// Displays `text` (if given) and a numbered menu of `options`, then
    /// resolves the operator's input to the index of one option.
    ///
    /// Input is resolved in two steps: an integer is taken as the 1-based
    /// number shown in the listing; anything else is matched, after
    /// trimming and lowercasing both sides, as a prefix of the option
    /// texts. A unique prefix selects its option; no match or an ambiguous
    /// match explains the problem and asks again. The returned index is
    /// always 0-based.
    ///
    /// A single-option menu is resolved immediately without reading input.
    ///
    /// # Errors
    /// - [`TerminalError::EmptyOptions`] if `options` is empty, before
    ///   anything is displayed or read.
    /// - [`TerminalError::Cancelled`] if input ends during the loop.
    pub fn choice<S: AsRef<str>>(
        &mut self,
        options: &[S],
        text: Option<&str>,
    ) -> Result<usize, TerminalError> {
        if options.is_empty() {
            return Err(TerminalError::EmptyOptions);
        }

        if let Some(text) = text {
            self.show(text)?;
        }
        let mut menu = String::from(HEADER);
        for (index, option) in options.iter().enumerate() {
            menu.push('\n');
            menu.push_str(&numbered_entry(index, option.as_ref()));
        }
        menu.push('\n');
        self.show(&menu)?;

        if options.len() == 1 {
            let only = options[0].as_ref();
            debug!("menu has a single option, selecting {:?}", only);
            self.show(&format!("Choosing the only available option: {}", only))?;
            return Ok(0);
        }

        loop {
            let raw = self.read_line(Some(INPUT_PROMPT))?;
            match resolve(options, &raw) {
                Ok(index) => {
                    debug!("resolved {:?} to option {}", raw, index);
                    return Ok(index);
                }
                Err(rejection) => {
                    if let Some(detail) = rejection.detail(options) {
                        self.show(&detail)?;
                    }
                    self.show(&format!(
                        "Sorry, please enter a number between 1 and {} or the start of a specific option.",
                        options.len()
                    ))?;
                }
            }
        }
    }
}

/// Resolves one line of raw input to a 0-based option index.
fn resolve<S: AsRef<str>>(options: &[S], raw: &str) -> Result<usize, Rejection> {
    let trimmed = raw.trim();

    if let Ok(number) = trimmed.parse::<i64>() {
        return index_from_human(number, options.len());
    }

    let normalized = trimmed.to_lowercase();
    let matches: Vec<usize> = options
        .iter()
        .enumerate()
        .filter(|(_, option)| {
            option
                .as_ref()
                .trim()
                .to_lowercase()
                .starts_with(&normalized)
        })
        .map(|(index, _)| index)
        .collect();

    match matches.as_slice() {
        [] => Err(Rejection::NoMatch(trimmed.to_string())),
        [index] => Ok(*index),
        _ => {
            debug!("{:?} is ambiguous across {} options", trimmed, matches.len());
            Err(Rejection::Ambiguous(trimmed.to_string(), matches))
        }
    }
}

/// Converts the 1-based number the operator sees into a 0-based index.
fn index_from_human(number: i64, len: usize) -> Result<usize, Rejection> {
    if number >= 1 && number <= len as i64 {
        Ok((number - 1) as usize)
    } else {
        Err(Rejection::OutOfRange)
    }
}

/// Renders one option under its 1-based number. Continuation lines of a
/// multi-line option are indented past the numbering so they cannot be
/// read as a separate entry.
fn numbered_entry(index: usize, option: &str) -> String {
    let prefix = format!("    {}. ", index + 1);
    let pad = " ".repeat(prefix.len());

    let mut rendered = String::new();
    for (line_number, line) in option.split('\n').enumerate() {
        if line_number == 0 {
            rendered.push_str(&prefix);
        } else {
            rendered.push('\n');
            rendered.push_str(&pad);
        }
        rendered.push_str(line);
    }
    rendered
}
