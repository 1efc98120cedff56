//! `slots` CLI — list, check and validate appointment slots from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Bookable times on a date, using the default schedule
//! slots list --date 2026-03-18
//!
//! # Same, against a saved schedule and the day's appointments, as JSON
//! slots --schedule barber.json --appointments bookings.json list --date 2026-03-18 --json
//!
//! # Can 09:30 AM be booked right now?
//! slots -s barber.json -a bookings.json check --date 2026-03-18 --time "09:30 AM"
//!
//! # Validate and normalize a schedule document (stdin → stdout)
//! slots validate < barber.json
//!
//! # Working hours summary, default schedule, appointment counts
//! slots -s barber.json hours
//! slots default
//! slots -a bookings.json stats --today 2026-03-18
//! ```
//!
//! `--schedule` and `--appointments` fall back to the `SLOTS_SCHEDULE` and
//! `SLOTS_APPOINTMENTS` environment variables. Log output goes to stderr and is
//! controlled by `RUST_LOG` (default `warn`).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use slot_engine::{
    available_slots, is_slot_available, parse_date, validate_weekly_schedule, working_hours,
    AppointmentStats, BookedAppointment, TimeOfDay, WeeklySchedule,
};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Appointment slot engine for weekly provider schedules"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Weekly schedule JSON file (uses the default schedule if omitted)
    #[arg(short, long, global = true, env = "SLOTS_SCHEDULE")]
    schedule: Option<String>,

    /// Appointments JSON file: an array of {date, time, status} objects
    #[arg(short, long, global = true, env = "SLOTS_APPOINTMENTS")]
    appointments: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List bookable start times on a date
    List {
        /// Calendar date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
        /// Print a JSON array instead of one time per line
        #[arg(long)]
        json: bool,
    },
    /// Check whether a specific date and time can be booked
    Check {
        /// Calendar date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
        /// Start time, e.g. "09:30 AM"
        #[arg(short, long)]
        time: String,
        /// Print {available, reason} as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a schedule document and print it normalized
    Validate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show working hours per day
    Hours,
    /// Print the default weekly schedule
    Default,
    /// Count appointments per status
    Stats {
        /// Date counted as "today" (YYYY-MM-DD)
        #[arg(long)]
        today: String,
    },
}

#[derive(Serialize)]
struct CheckOutput {
    available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::List { date, json } => {
            let date = parse_date(&date)?;
            let schedule = load_schedule(cli.schedule.as_deref())?;
            let appointments = load_appointments(cli.appointments.as_deref())?;

            let slots = available_slots(&schedule, date, &appointments);
            if json {
                println!("{}", serde_json::to_string(&slots)?);
            } else {
                for slot in &slots {
                    println!("{}", slot);
                }
            }
        }
        Commands::Check { date, time, json } => {
            let date = parse_date(&date)?;
            let time: TimeOfDay = time.parse()?;
            let schedule = load_schedule(cli.schedule.as_deref())?;
            let appointments = load_appointments(cli.appointments.as_deref())?;

            let result = is_slot_available(&schedule, date, time, &appointments);
            if json {
                let out = CheckOutput {
                    available: result.is_available(),
                    reason: result.reason().map(|r| r.to_string()),
                };
                println!("{}", serde_json::to_string(&out)?);
            } else {
                match result.reason() {
                    None => println!("available"),
                    Some(reason) => println!("unavailable: {}", reason),
                }
            }
        }
        Commands::Validate { input, output } => {
            let json = read_schedule_source(input.as_deref())?;
            let schedule =
                WeeklySchedule::from_json(&json).context("Failed to parse schedule JSON")?;
            let normalized =
                validate_weekly_schedule(&schedule).context("Schedule failed validation")?;
            emit(output.as_deref(), &normalized.to_json()?)?;
        }
        Commands::Hours => {
            let schedule = load_schedule(cli.schedule.as_deref())?;
            for day in working_hours(&schedule) {
                println!("{:<10} {}", day.day.label(), day.hours);
            }
        }
        Commands::Default => {
            println!("{}", WeeklySchedule::default().to_json()?);
        }
        Commands::Stats { today } => {
            let today = parse_date(&today)?;
            let appointments = load_appointments(cli.appointments.as_deref())?;
            let stats = AppointmentStats::collect(&appointments, today);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}

/// Install a stderr subscriber filtered by `RUST_LOG`, defaulting to `warn`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A subscriber may already be set when embedded; keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Read, parse and validate the schedule, or fall back to the default one.
fn load_schedule(path: Option<&str>) -> Result<WeeklySchedule> {
    let schedule = match path {
        Some(path) => WeeklySchedule::from_json(&read_file(path, "schedule")?)
            .with_context(|| format!("Failed to parse schedule file: {}", path))?,
        None => {
            debug!("no schedule file given, using the default schedule");
            WeeklySchedule::default()
        }
    };
    validate_weekly_schedule(&schedule).context("Schedule failed validation")
}

fn load_appointments(path: Option<&str>) -> Result<Vec<BookedAppointment>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let json = read_file(path, "appointments")?;
    let appointments: Vec<BookedAppointment> = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse appointments file: {}", path))?;
    debug!(count = appointments.len(), "loaded appointments");
    Ok(appointments)
}

fn read_file(path: &str, kind: &str) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {} file: {}", kind, path))
}

/// The schedule document for `validate`: the `--input` file, else stdin.
fn read_schedule_source(path: Option<&str>) -> Result<String> {
    if let Some(path) = path {
        return read_file(path, "schedule");
    }
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read schedule from stdin")?;
    Ok(buf)
}

/// Print to stdout, or write to `path` with a trailing newline.
fn emit(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, format!("{}\n", content))
            .with_context(|| format!("Failed to write output file: {}", path)),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}
