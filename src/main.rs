//! CLI entrypoint for `roster`.
//!
//! Parses the meeting type and ID, loads API credentials from the environment,
//! follows the participants report page by page into a JSON-lines file, then
//! extracts the deduplicated roster into a TSV file and prints the redacted
//! listing to stdout.
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum, builder::NonEmptyStringValueParser};
use colored::Colorize;
use log::{LevelFilter, error};
use roster::{
    config::Config,
    export::{save_roster_tsv, write_listing},
    fetch::HttpPageFetcher,
    meeting::{Meeting, MeetingType},
    pacing::{DEFAULT_PAGE_DELAY, FixedDelay},
    paginate::fetch_to_file,
    roster::{Roster, extract_file},
};

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    version,
    about = "Fetch a deduplicated, email-redacted participant roster for a meeting or webinar"
)]
struct Args {
    /// Session kind: meeting or webinar
    meeting_type: MeetingType,

    /// Meeting or webinar ID
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    meeting_id: String,

    /// Directory for the raw JSON-lines and TSV files
    #[arg(short = 'o', long = "output", default_value = ".")]
    output: PathBuf,

    /// Re-extract from an existing raw file instead of calling the API
    #[arg(long = "skip-fetch")]
    skip_fetch: bool,

    /// Pause between page requests, in milliseconds
    #[arg(long = "delay-ms", default_value_t = DEFAULT_PAGE_DELAY.as_millis() as u64)]
    delay_ms: u64,

    /// Increase verbosity (-v, -vv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control color of the summary line (auto, always, never)
    #[arg(long = "color", value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Suppress the participant listing (files are still written)
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .try_init();
}

fn fetch_raw(
    config: &Config,
    meeting: &Meeting,
    raw_path: &Path,
    delay: Duration,
) -> Result<usize> {
    let mut fetcher = HttpPageFetcher::new(config)?;
    let mut pacer = FixedDelay(delay);
    fetch_to_file(&mut fetcher, &mut pacer, meeting, raw_path)
}

fn load_existing(raw_path: &Path) -> Result<Roster> {
    if !raw_path.exists() {
        bail!(
            "raw file not found: {} (run without --skip-fetch first)",
            raw_path.display()
        );
    }
    extract_file(raw_path)
}

fn print_listing(roster: &Roster) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_listing(roster, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);
    match args.color {
        ColorChoice::Always => {
            colored::control::set_override(true);
        }
        ColorChoice::Never => {
            colored::control::set_override(false);
        }
        ColorChoice::Auto => {}
    }

    let meeting = Meeting::new(args.meeting_type, args.meeting_id.clone());
    let raw_path = meeting.raw_path(&args.output);
    let tsv_path = meeting.tsv_path(&args.output);

    let config = if args.skip_fetch {
        None
    } else {
        match Config::from_env() {
            Ok(c) => Some(c),
            Err(e) => {
                error!("{}", e);
                std::process::exit(2);
            }
        }
    };

    if let Err(e) = fs::create_dir_all(&args.output) {
        error!(
            "failed to create output directory {}: {}",
            args.output.display(),
            e
        );
        std::process::exit(5);
    }

    let pages = match &config {
        Some(config) => {
            let delay = Duration::from_millis(args.delay_ms);
            match fetch_raw(config, &meeting, &raw_path, delay) {
                Ok(n) => Some(n),
                Err(e) => {
                    error!("failed to fetch participants: {:#}", e);
                    std::process::exit(3);
                }
            }
        }
        None => None,
    };

    let extracted = if pages.is_some() {
        extract_file(&raw_path)
    } else {
        load_existing(&raw_path)
    };
    let roster = match extracted {
        Ok(r) => r,
        Err(e) => {
            error!("failed to extract participants: {:#}", e);
            std::process::exit(4);
        }
    };

    if let Err(e) = save_roster_tsv(&roster, &tsv_path) {
        error!("failed to write {}: {:#}", tsv_path.display(), e);
        std::process::exit(5);
    }

    if !args.quiet {
        if let Err(e) = print_listing(&roster) {
            error!("failed to print listing: {:#}", e);
            std::process::exit(5);
        }
        let summary = match pages {
            Some(n) => format!("{} participants from {} pages", roster.len(), n),
            None => format!("{} participants from {}", roster.len(), raw_path.display()),
        };
        eprintln!("{}", summary.bold().green());
    }
}
