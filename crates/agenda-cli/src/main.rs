//! `agenda` CLI — query blocked professional agendas from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Is the date fully closed for professional 7?
//! agenda check-date -i blocks.json --date 2026-08-14 --professional 7
//!
//! # Does a 10:00-11:00 booking fit?
//! agenda check-range -i blocks.json --date 2026-08-14 \
//!   --from 10:00 --to 11:00 --professional 7
//!
//! # Show the blocked ranges on a date
//! agenda list -i blocks.json --date 2026-08-14 --professional 7
//!
//! # Dropdown options at 30-minute steps, plus the first free hour
//! agenda slots -i blocks.json --date 2026-08-14 --professional 7 --duration 60
//!
//! # Pull the raw agenda from a live backend
//! agenda fetch --base-url https://api.example.com --professional 7
//! ```
//!
//! `check-date` and `check-range` exit with status 1 when the answer is
//! "blocked" / "unavailable", so they compose in shell scripts.

use std::io::{self, Read};
use std::process;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use agenda_client::{AgendaApi, ApiConfig};
use agenda_engine::block::{BlockedInterval, ClockTime};

#[derive(Parser)]
#[command(name = "agenda", version, about = "Blocked professional agenda queries")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a calendar date is fully closed for a professional
    CheckDate {
        /// Blocked-agenda JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Date to check (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Professional id
        #[arg(long)]
        professional: i64,
    },
    /// Check whether a [from, to) booking range is available
    CheckRange {
        /// Blocked-agenda JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Date to check (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Inclusive start time (HH:MM or HH:MM:SS)
        #[arg(long)]
        from: String,
        /// Exclusive end time (HH:MM or HH:MM:SS)
        #[arg(long)]
        to: String,
        /// Professional id
        #[arg(long)]
        professional: i64,
    },
    /// List the blocked ranges on a date
    List {
        /// Blocked-agenda JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Date to list (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Professional id
        #[arg(long)]
        professional: i64,
    },
    /// Show the start-time options for a date, flagged blocked or free
    Slots {
        /// Blocked-agenda JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Date to discretize (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Professional id
        #[arg(long)]
        professional: i64,
        /// Step between options, in minutes
        #[arg(long, default_value_t = 30)]
        step: u32,
        /// Also find the first available range of this many minutes
        #[arg(long)]
        duration: Option<u32>,
    },
    /// Fetch the blocked agenda from a live backend and print it as JSON
    Fetch {
        /// Base URL of the reclamos backend
        #[arg(long)]
        base_url: String,
        /// Professional id
        #[arg(long)]
        professional: i64,
        /// Request timeout in seconds
        #[arg(long, default_value_t = 10)]
        timeout_secs: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::CheckDate {
            input,
            date,
            professional,
        } => {
            let blocks = load_blocks(input.as_deref())?;
            let date = parse_date(&date)?;
            if agenda_engine::is_date_fully_blocked(&blocks, date, Some(professional)) {
                println!("{}: fully blocked", date);
                process::exit(1);
            }
            println!("{}: available", date);
        }
        Commands::CheckRange {
            input,
            date,
            from,
            to,
            professional,
        } => {
            let blocks = load_blocks(input.as_deref())?;
            let date = parse_date(&date)?;
            let from = parse_time(&from)?;
            let to = parse_time(&to)?;
            if !agenda_engine::is_range_available(&blocks, date, from, to, Some(professional)) {
                println!("{} {} - {}: unavailable", date, from, to);
                process::exit(1);
            }
            println!("{} {} - {}: available", date, from, to);
        }
        Commands::List {
            input,
            date,
            professional,
        } => {
            let blocks = load_blocks(input.as_deref())?;
            let date = parse_date(&date)?;
            let ranges = agenda_engine::list_blocked_ranges(&blocks, date, Some(professional));
            if ranges.is_empty() {
                println!("no blocks on {}", date);
            }
            for range in ranges {
                if range.to.is_end_of_day() {
                    println!("{} - end of day", range.from);
                } else {
                    println!("{} - {}", range.from, range.to);
                }
            }
        }
        Commands::Slots {
            input,
            date,
            professional,
            step,
            duration,
        } => {
            let blocks = load_blocks(input.as_deref())?;
            let date = parse_date(&date)?;
            for option in agenda_engine::day_options(&blocks, date, Some(professional), step) {
                let state = if option.blocked { "blocked" } else { "free" };
                println!("{}  {}", option.time, state);
            }
            if let Some(duration) = duration {
                match agenda_engine::first_available_range(
                    &blocks,
                    date,
                    Some(professional),
                    duration,
                    step,
                ) {
                    Some(range) => println!("first fit: {} - {}", range.from, range.to),
                    None => println!("first fit: none"),
                }
            }
        }
        Commands::Fetch {
            base_url,
            professional,
            timeout_secs,
        } => {
            let config = ApiConfig::new(base_url).with_timeout_secs(timeout_secs);
            let api = AgendaApi::new(&config)?;
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .context("Failed to start async runtime")?;
            let blocks = runtime
                .block_on(api.fetch_blocked(professional))
                .context("Failed to fetch blocked agenda")?;
            println!("{}", serde_json::to_string_pretty(&blocks)?);
        }
    }

    Ok(())
}

/// Read and decode the blocked-agenda payload from a file or stdin.
fn load_blocks(path: Option<&str>) -> Result<Vec<BlockedInterval>> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    agenda_engine::decode_blocked_intervals(&json).context("Failed to decode blocked agenda")
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}': expected YYYY-MM-DD", raw))
}

fn parse_time(raw: &str) -> Result<ClockTime> {
    raw.parse()
        .with_context(|| format!("Invalid time '{}'", raw))
}
