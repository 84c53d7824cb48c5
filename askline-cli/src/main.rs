//! Interactive tour of the askline prompts.

use std::fs::File;

use clap::Parser;
use log::info;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use askline::{DEFAULT_SENTINEL, Terminal, TerminalError};

#[derive(Parser)]
#[command(name = "askline", about = "Interactive demo of the askline prompt library")]
struct Args {
    /// Line that ends multiline input
    #[arg(long, default_value = DEFAULT_SENTINEL)]
    sentinel: String,

    /// Log debug detail to askline.log
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // Log to a file so the interactive surface stays clean.
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("askline.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    if let Err(error) = run(&args) {
        match error {
            // The operator backed out; end quietly.
            TerminalError::Cancelled => {}
            other => eprintln!("{}", other),
        }
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), TerminalError> {
    let mut terminal = Terminal::stdio();

    let story = terminal.multiline_prompt_with("Tell me something interesting", &args.sentinel)?;
    terminal.show(&format!("Got back:\n{}", story))?;

    let name = terminal.valid_prompt("What should I call you?", |answer| {
        if answer.trim().is_empty() { Err(()) } else { Ok(()) }
    })?;

    let options = ["The first option", "The second option", "The third option"];
    let picked = terminal.choice(&options, Some("Here are a few options."))?;
    info!("operator picked option {} of {}", picked + 1, options.len());

    terminal.show(&format!("{}, you chose: {}", name.trim(), options[picked]))?;
    Ok(())
}
