//! # Askline
//!
//! A small Rust library for line-based terminal interaction: prompting,
//! validated input loops, sentinel-terminated multiline capture, and
//! numbered menu selection with prefix matching.
//!
//! ## Features
//!
//! - **Interactive Terminal Interface** - Prompting built on injected I/O
//!   handles, so sessions can be scripted in tests
//! - **Validated Input Loops** - Repeat a prompt until a caller-supplied
//!   validator accepts the response
//! - **Multiline Capture** - Accumulate lines until a sentinel line, `..`
//!   by default
//! - **Menu Selection** - Numbered options resolved by number or by an
//!   unambiguous prefix of the option text, with ambiguity reporting
//! - **Unified Cancellation** - End-of-input is one signal,
//!   [`TerminalError::Cancelled`], at every level
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! askline = "0.1"
//! ```
//!
//! ## Usage Examples
//!
//! ### Basic prompting
//!
//! ```rust,no_run
//! use askline::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! let name = terminal.prompt("What is your name?").unwrap();
//! terminal.show(&format!("Hello, {}!", name)).unwrap();
//! ```
//!
//! ### Validated input
//!
//! ```rust,no_run
//! use askline::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//!
//! // Repeats until the response parses; any validator error means "ask again".
//! let threads = terminal
//!     .valid_prompt("Worker threads (1-16):", |answer| {
//!         match answer.trim().parse::<u8>() {
//!             Ok(n) if (1..=16).contains(&n) => Ok(()),
//!             Ok(_) => Err("out of range".to_string()),
//!             Err(e) => Err(e.to_string()),
//!         }
//!     })
//!     .unwrap();
//! println!("Threads: {}", threads);
//! ```
//!
//! ### Menu selection
//!
//! ```rust,no_run
//! use askline::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! let options = ["Scan target", "Show report", "Quit"];
//!
//! // The operator may type "2", "show", or even "s" if unambiguous.
//! let picked = terminal.choice(&options, Some("What next?")).unwrap();
//! println!("doing: {}", options[picked]);
//! ```
//!
//! ### Multiline capture
//!
//! ```rust,no_run
//! use askline::Terminal;
//!
//! let mut terminal = Terminal::stdio();
//! let notes = terminal.multiline_prompt("Enter your notes").unwrap();
//! println!("captured {} bytes", notes.len());
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns `Result<T, TerminalError>`:
//!
//! ```rust,no_run
//! use askline::{Terminal, TerminalError};
//!
//! let mut terminal = Terminal::stdio();
//! match terminal.choice(&["stay", "go"], None) {
//!     Ok(index) => println!("picked {}", index),
//!     Err(TerminalError::Cancelled) => {} // operator backed out
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```
//!
//! Invalid responses are not errors: the prompting loops explain the
//! problem to the operator and ask again. Only cancellation, an empty
//! option list, or a failing stream reach the caller.

mod choice;
mod error;
mod prompt;
mod terminal;

pub use error::TerminalError;
pub use prompt::DEFAULT_SENTINEL;
pub use terminal::Terminal;
