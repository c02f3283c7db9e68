//! Command-line definitions for the `hotelops` binary.

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};
use uuid::Uuid;

/// Hotel spa desk: treatment menu, availability and bookings.
#[derive(Parser)]
#[command(name = "hotelops", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Detailed logging (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the treatment menu.
    Services,

    /// Show bookable start times for a treatment.
    Slots {
        /// Day to search (YYYY-MM-DD, default: today).
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Service name or id.
        #[arg(long)]
        service: String,

        /// Session length in minutes.
        #[arg(long)]
        duration: u32,
    },

    /// List the bookings of a day.
    #[command(alias = "ls")]
    Bookings {
        /// Day to list (YYYY-MM-DD, default: today).
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Book a treatment at an available start time.
    Book {
        /// Day of the session (YYYY-MM-DD, default: today).
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Start time (HH:MM).
        #[arg(long, value_parser = parse_time)]
        time: NaiveTime,

        /// Service name or id.
        #[arg(long)]
        service: String,

        /// Session length in minutes.
        #[arg(long)]
        duration: u32,

        /// Guest name.
        #[arg(long)]
        guest: String,

        /// Guest room number.
        #[arg(long)]
        room: Option<String>,

        /// Assigned therapist.
        #[arg(long)]
        therapist: Option<String>,

        /// Free-form notes.
        #[arg(long)]
        notes: Option<String>,
    },

    /// Mark a booking completed, cancelled or no-show.
    Status {
        /// Day the booking belongs to (YYYY-MM-DD, default: today).
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Booking id.
        #[arg(long)]
        id: Uuid,

        /// New status (completed, cancelled, no-show).
        #[arg(long)]
        status: String,
    },

    /// Daily spa summary.
    Report {
        /// Day to summarize (YYYY-MM-DD, default: today).
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

impl Commands {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Commands::Services => None,
            Commands::Slots { date, .. }
            | Commands::Bookings { date }
            | Commands::Book { date, .. }
            | Commands::Status { date, .. }
            | Commands::Report { date } => *date,
        }
    }
}

fn parse_time(raw: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|e| format!("expected HH:MM, got {:?}: {}", raw, e))
}
