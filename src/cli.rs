//! Command-line argument definitions.

use std::path::PathBuf;

use calendar_grid::models::event::EventId;
use calendar_grid::models::ui::ViewKind;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// Inspect event layouts and drag reschedules for a calendar grid.
#[derive(Debug, Parser)]
#[command(name = "calendar-grid", version, about, long_about = None)]
pub struct Cli {
    /// Path to the settings file (defaults to $CALENDAR_GRID_CONFIG or the user config dir).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the placement of every event as JSON.
    Layout {
        /// JSON file holding an array of events.
        events: PathBuf,

        /// Only lay out the events visible on this day (YYYY-MM-DD).
        #[arg(value_parser = parse_date)]
        date: Option<NaiveDate>,
    },

    /// Drag one event to a day and print the resulting commit intent.
    #[command(allow_negative_numbers = true)]
    Reschedule {
        /// JSON file holding an array of events.
        events: PathBuf,

        /// Id of the event to move.
        event_id: EventId,

        /// Target day (YYYY-MM-DD).
        #[arg(value_parser = parse_date)]
        date: NaiveDate,

        /// Pointer position over the time track, in pixels.
        pointer_y: Option<f32>,

        /// View the drop happens in.
        #[arg(long, value_enum, default_value_t = ViewArg::Week)]
        view: ViewArg,
    },

    /// Print the snapped clock time under a pointer position.
    #[command(allow_negative_numbers = true)]
    Snap {
        /// Pointer position, in pixels.
        pointer_y: f32,

        /// Top edge of the time track container.
        #[arg(default_value_t = 0.0)]
        top_y: f32,

        /// Current scroll offset of the time track.
        #[arg(default_value_t = 0.0)]
        scroll_offset: f32,
    },
}

/// Calendar view accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewArg {
    Day,
    Week,
    Month,
}

impl From<ViewArg> for ViewKind {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Day => ViewKind::Day,
            ViewArg::Week => ViewKind::Week,
            ViewArg::Month => ViewKind::Month,
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{}', expected YYYY-MM-DD", value))
}
