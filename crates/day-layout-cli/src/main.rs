//! `daylayout` CLI: lay out a day of calendar events from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Lay out an event map or event list (stdin → stdout)
//! echo '{"1":{"start":0,"end":60},"2":{"start":30,"end":90}}' | daylayout layout --max-width 600
//!
//! # Size the layout for a 621px container (minus border and padding)
//! daylayout layout -i events.json --container-width 621
//!
//! # Let events widen into free neighbouring columns
//! daylayout layout -i events.json --policy expand
//!
//! # Render boxes with border/padding insets applied
//! daylayout boxes -i events.json -o boxes.json
//!
//! # Sidebar time labels, or labels for specific minute offsets
//! daylayout labels
//! daylayout labels --minutes 0,245 --day-start 08:00
//!
//! # Generate a reproducible random day
//! daylayout generate --count 20 --seed 7
//! ```
//!
//! Diagnostics (skipped events, empty input) go to stderr through `tracing`;
//! set `RUST_LOG` or pass `--verbose` to see more.

use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::NaiveTime;
use clap::{Args, Parser, Subcommand};
use day_layout::clock::DEFAULT_SIDEBAR_HOURS;
use day_layout::generate::DEFAULT_SAMPLE_COUNT;
use day_layout::{BoxInsets, ColumnPolicy, DayClock, DayLayout, LayoutOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "daylayout",
    version,
    about = "Lay out a single day's calendar events into side-by-side columns"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log layout decisions (overlap groups, column counts) to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute positioned events (JSON) from an event map or event list
    Layout(LayoutArgs),
    /// Compute drawable boxes with border and padding insets applied
    Boxes(LayoutArgs),
    /// Print wall-clock labels
    Labels {
        /// Wall-clock time that minute 0 corresponds to
        #[arg(long, default_value = "09:00")]
        day_start: NaiveTime,
        /// Comma-separated minute offsets to label (prints the sidebar if omitted)
        #[arg(long, value_delimiter = ',')]
        minutes: Vec<i64>,
        /// First sidebar hour
        #[arg(long, default_value_t = DEFAULT_SIDEBAR_HOURS.0)]
        from: u32,
        /// Last sidebar hour
        #[arg(long, default_value_t = DEFAULT_SIDEBAR_HOURS.1)]
        to: u32,
    },
    /// Generate a random day as an event map
    Generate {
        /// Number of events
        #[arg(short, long, default_value_t = DEFAULT_SAMPLE_COUNT)]
        count: usize,
        /// Seed for reproducible output (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Args)]
struct LayoutArgs {
    /// Input file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
    /// Width available to events, in pixels
    #[arg(long, conflicts_with = "container_width")]
    max_width: Option<i64>,
    /// Width of the whole day column; container insets are subtracted
    #[arg(long)]
    container_width: Option<i64>,
    /// Column policy: group (one column per event) or expand
    #[arg(long)]
    policy: Option<ColumnPolicy>,
    /// JSON config file with `layout` options and renderer `insets`
    #[arg(long)]
    config: Option<String>,
}

/// Settings loadable from `--config`. Command-line flags take precedence.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    layout: LayoutOptions,
    insets: BoxInsets,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Layout(args) => {
            let (layout, _) = run_layout(&args)?;
            let json = serde_json::to_string_pretty(&layout)?;
            write_output(args.output.as_deref(), &json)?;
        }
        Commands::Boxes(args) => {
            let (layout, insets) = run_layout(&args)?;
            let boxes = insets.place_all(&layout.events);
            let json = serde_json::to_string_pretty(&boxes)?;
            write_output(args.output.as_deref(), &json)?;
        }
        Commands::Labels {
            day_start,
            minutes,
            from,
            to,
        } => {
            let lines: Vec<String> = if minutes.is_empty() {
                DayClock::sidebar(from, to)
                    .context("Failed to build sidebar labels")?
                    .iter()
                    .map(|label| label.to_string())
                    .collect()
            } else {
                let clock = DayClock::new(day_start);
                minutes
                    .iter()
                    .map(|&m| clock.label(m).map(|label| format!("{}\t{}", m, label)))
                    .collect::<day_layout::error::Result<_>>()
                    .context("Failed to label minutes")?
            };
            println!("{}", lines.join("\n"));
        }
        Commands::Generate {
            count,
            seed,
            output,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let mut map = serde_json::Map::new();
            for (id, range) in day_layout::generate_events(count, &mut rng) {
                map.insert(id.to_string(), serde_json::to_value(range)?);
            }
            let json = serde_json::to_string_pretty(&map)?;
            write_output(output.as_deref(), &json)?;
        }
    }

    Ok(())
}

/// Read, parse, and lay out the events named by `args`.
///
/// Returns the layout together with the renderer insets in effect.
fn run_layout(args: &LayoutArgs) -> Result<(DayLayout, BoxInsets)> {
    let config = match args.config.as_deref() {
        Some(path) => load_config(path)?,
        None => FileConfig::default(),
    };

    let mut options = config.layout;
    if let Some(width) = args.max_width {
        options.max_width = width;
    } else if let Some(container) = args.container_width {
        options.max_width = config
            .insets
            .usable_width(container)
            .context("Container is too narrow for its insets")?;
    }
    if let Some(policy) = args.policy {
        options.policy = policy;
    }
    debug!(max_width = options.max_width, policy = ?options.policy, "layout options");

    let raw = read_input(args.input.as_deref())?;
    let events = day_layout::parse_events(&raw).context("Failed to parse events")?;
    let layout =
        day_layout::lay_out_day_with(&events, &options).context("Failed to lay out events")?;

    if layout.is_empty() {
        warn!("no events received");
    }

    Ok((layout, config.insets))
}

fn load_config(path: &str) -> Result<FileConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid config file: {}", path))
}

/// Log to stderr so stdout stays valid JSON. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
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
            println!("{}", content);
        }
    }
    Ok(())
}
