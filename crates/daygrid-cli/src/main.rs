//! `daygrid` CLI — lay out a day's events from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Lay out events (stdin → stdout)
//! echo '[{"id":"a","start":"2026-03-16T09:00:00","end":"2026-03-16T10:00:00"}]' | daygrid layout
//!
//! # Lay out from file to file, on a grid starting at 06:00
//! daygrid layout -i events.json -o blocks.json --start-hour 6
//!
//! # Tighter items, taller grid
//! daygrid layout -i events.json --item-width 90 --minute-height 1.5
//!
//! # Summarize collision groups and column usage
//! daygrid stats -i events.json
//! ```
//!
//! Event objects need `id` plus optional `start`/`end` local datetimes; any
//! other fields are opaque payload and come back untouched next to the
//! computed `layout` block.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};
use daygrid_core::{
    group_collisions, layout_day, normalize_events, pack_columns, DayEvent, GridConfig,
    LayoutBlock,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "daygrid", version, about = "Day-view event layout CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GridArgs {
    /// Hour (0-23) rendered at the top edge of the grid
    #[arg(long, default_value_t = 0)]
    start_hour: u32,

    /// Vertical pixels per minute
    #[arg(long, default_value_t = 1.0)]
    minute_height: f64,

    /// Percentage of a column's width an event occupies (the rest is gutter)
    #[arg(long, default_value_t = 95.0)]
    item_width: f64,
}

impl GridArgs {
    fn to_config(&self) -> GridConfig {
        GridConfig {
            day_start_hour: self.start_hour,
            minute_height_px: self.minute_height,
            item_width_percent: self.item_width,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Compute layout blocks for a JSON array of events
    Layout {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[command(flatten)]
        grid: GridArgs,
    },
    /// Show collision group and column statistics
    Stats {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

/// Wire format for one incoming event. Unrecognized fields collect into
/// `payload` and ride through unchanged.
#[derive(Deserialize)]
struct WireEvent {
    id: String,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

/// Wire format for one outgoing block.
#[derive(Serialize)]
struct WireBlock {
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<NaiveDateTime>,
    layout: LayoutBlock,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Layout {
            input,
            output,
            grid,
        } => {
            let events = read_events(input.as_deref())?;
            let positioned =
                layout_day(events, &grid.to_config()).context("Failed to lay out events")?;

            let blocks: Vec<WireBlock> = positioned
                .into_iter()
                .map(|p| WireBlock {
                    id: p.event.id,
                    start: p.event.start,
                    end: p.event.end,
                    layout: p.layout,
                    payload: p.event.payload,
                })
                .collect();

            let pretty = serde_json::to_string_pretty(&blocks)?;
            write_output(output.as_deref(), &pretty)?;
        }
        Commands::Stats { input } => {
            let events = read_events(input.as_deref())?;
            let total = events.len();

            let normalized = normalize_events(events);
            let kept = normalized.len();
            let packed: Vec<_> = group_collisions(normalized)
                .into_iter()
                .map(pack_columns)
                .collect();

            let singletons = packed.iter().filter(|g| g.events.len() == 1).count();
            let max_columns = packed.iter().map(|g| g.column_count).max().unwrap_or(0);

            println!("Events:       {} ({} dropped)", kept, total - kept);
            println!("Groups:       {} ({} singleton)", packed.len(), singletons);
            println!("Max columns:  {}", max_columns);
        }
    }

    Ok(())
}

fn read_events(path: Option<&str>) -> Result<Vec<DayEvent<Map<String, Value>>>> {
    let raw = read_input(path)?;
    let wire: Vec<WireEvent> = serde_json::from_str(&raw)
        .context("Failed to parse events JSON (expected an array of event objects)")?;
    Ok(wire
        .into_iter()
        .map(|w| DayEvent {
            id: w.id,
            start: w.start,
            end: w.end,
            payload: w.payload,
        })
        .collect())
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
