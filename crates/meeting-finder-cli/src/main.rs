//! `findmeeting` CLI - find free meeting times from a JSON calendar file.
//!
//! ## Usage
//!
//! ```sh
//! # Find meeting times (stdin → stdout)
//! cat day.json | findmeeting query
//!
//! # Read from a file, write JSON to a file
//! findmeeting query -i day.json -o times.json --format json
//!
//! # Validate input and show how many events constrain the meeting
//! findmeeting check -i day.json
//!
//! # Show scheduler decisions on stderr
//! findmeeting -v query -i day.json
//! ```
//!
//! Logging goes to stderr and honours `RUST_LOG`.

mod input;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meeting_finder::filter::{relevant_events, required_only_events};
use meeting_finder::{schedule, AttendeeView, Schedule};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "findmeeting",
    version,
    about = "Find free meeting times in a day of calendars"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log scheduler decisions to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every time the requested meeting could be held
    Query {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Validate input and report how many events constrain the meeting
    Check {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Query {
            input,
            output,
            format,
        } => {
            let json = read_input(input.as_deref())?;
            let query = input::parse_query(&json)?;
            let result = schedule(&query.events, &query.request);

            let rendered = match format {
                Format::Text => render_text(&result)?,
                Format::Json => {
                    let mut s = serde_json::to_string_pretty(&result)
                        .context("Failed to serialize meeting times")?;
                    s.push('\n');
                    s
                }
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Check { input } => {
            let json = read_input(input.as_deref())?;
            let query = input::parse_query(&json)?;
            let required = query.request.required_attendees();
            let optional = query.request.optional_attendees();

            let relevant = relevant_events(&query.events, required, optional);
            let required_only = required_only_events(&relevant, optional);

            println!("Events:         {}", query.events.len());
            println!("Relevant:       {}", relevant.len());
            println!("Required-only:  {}", required_only.len());
            println!("Duration:       {} min", query.request.duration());
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// One `HH:MM-HH:MM (N min)` line per slot, preceded by a note when optional
/// attendees had to be left out.
fn render_text(result: &Schedule) -> Result<String> {
    let mut out = String::new();

    if result.view == AttendeeView::RequiredOnly && !result.times.is_empty() {
        out.push_str("No time fits optional attendees; showing times for required attendees.\n");
    }
    if result.times.is_empty() {
        out.push_str("No available times.\n");
    }

    for range in &result.times {
        out.push_str(&format!(
            "{}-{} ({} min)\n",
            input::format_clock(range.start())?,
            input::format_clock(range.end())?,
            range.duration()
        ));
    }

    Ok(out)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
