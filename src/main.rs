mod cli;

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use hotelops_core::{
    errors::SpaError,
    models::{
        booking::{Booking, BookingStatus, CreateBookingRequest},
        service::SpaService,
    },
};
use hotelops_desk::{
    config::DeskConfig,
    handlers::{
        availability::{available_slots, SlotQuery},
        booking::{create_booking, list_bookings, update_booking_status},
        report::daily_report,
    },
    init_state, DeskState,
};
use serde_json::to_string_pretty;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;
use uuid::Uuid;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = DeskConfig::from_env()?;

    // Initialize logging, command-line verbosity wins over LOG_LEVEL
    let level = match cli.verbose {
        0 => config.log_level,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let day = cli
        .command
        .date()
        .unwrap_or_else(|| Local::now().date_naive());
    debug!("Working day: {}", day);

    let state = init_state(&config, day).await?;

    match cli.command {
        Commands::Services => {
            let services = state.services.list_services().await?;
            if cli.json {
                println!("{}", to_string_pretty(&services)?);
            } else {
                print_services(&services);
            }
        }

        Commands::Slots {
            service, duration, ..
        } => {
            let service = resolve_service(&state, &service).await?;
            let response = available_slots(
                &state,
                SlotQuery {
                    date: day,
                    service_id: service.id,
                    duration_minutes: duration,
                },
            )
            .await?;

            if cli.json {
                println!("{}", to_string_pretty(&response)?);
            } else if response.slots.is_empty() {
                println!(
                    "No available time slots for {} ({} min) on {}",
                    response.service_name, response.duration_minutes, response.date
                );
            } else {
                println!(
                    "{} ({} min) on {}:",
                    response.service_name, response.duration_minutes, response.date
                );
                for slot in &response.slots {
                    let peak = if slot.is_peak_hour { "  peak" } else { "" };
                    println!(
                        "  {} - {}{}",
                        slot.start_time.format("%H:%M"),
                        slot.end_time.format("%H:%M"),
                        peak
                    );
                }
            }
        }

        Commands::Bookings { .. } => {
            let bookings = list_bookings(&state, day).await?;
            if cli.json {
                println!("{}", to_string_pretty(&bookings)?);
            } else {
                print_bookings(&state, day, &bookings).await?;
            }
        }

        Commands::Book {
            time,
            service,
            duration,
            guest,
            room,
            therapist,
            notes,
            ..
        } => {
            let service = resolve_service(&state, &service).await?;
            let booking = create_booking(
                &state,
                CreateBookingRequest {
                    service_id: service.id,
                    date: day,
                    start_time: time,
                    duration_minutes: duration,
                    guest_name: guest,
                    room_number: room,
                    therapist,
                    notes,
                },
            )
            .await?;

            if cli.json {
                println!("{}", to_string_pretty(&booking)?);
            } else {
                println!(
                    "Booked {} for {} at {} ({})",
                    service.name,
                    booking.guest_name,
                    booking.start_time.format("%Y-%m-%d %H:%M"),
                    booking.id
                );
            }
        }

        Commands::Status { id, status, .. } => {
            let status: BookingStatus = status.parse()?;
            let booking = update_booking_status(&state, id, status)
                .await
                .wrap_err_with(|| format!("Failed to update booking {}", id))?;

            if cli.json {
                println!("{}", to_string_pretty(&booking)?);
            } else {
                println!("Booking {} is now {}", booking.id, booking.status);
            }
        }

        Commands::Report { .. } => {
            let report = daily_report(&state, day).await?;
            if cli.json {
                println!("{}", to_string_pretty(&report)?);
            } else {
                println!("Spa report for {}", report.date);
                println!("  Bookings: {}", report.total_bookings);
                for (status, count) in &report.by_status {
                    println!("    {:<10} {}", status, count);
                }
                println!("  Peak-hour bookings: {}", report.peak_hour_bookings);
                println!("  Revenue: {}", format_price(report.revenue_cents));
                println!("  By service:");
                for summary in report.by_service.values() {
                    println!(
                        "    {:<22} {:>2} sessions {:>4} min {:>10}",
                        summary.service_name,
                        summary.bookings,
                        summary.booked_minutes,
                        format_price(summary.revenue_cents)
                    );
                }
                println!("  By room:");
                for (room, count) in &report.by_room {
                    println!("    {:<6} {}", room, count);
                }
            }
        }
    }

    Ok(())
}

/// Looks a service up by id, falling back to a case-insensitive name match.
async fn resolve_service(state: &Arc<DeskState>, key: &str) -> Result<SpaService> {
    let found = match Uuid::parse_str(key.trim()) {
        Ok(id) => state.services.get_service_by_id(id).await?,
        Err(_) => state.services.find_service_by_name(key).await?,
    };

    found.ok_or_else(|| SpaError::NotFound(format!("Service {:?} not found", key)).into())
}

fn print_services(services: &[SpaService]) {
    for service in services {
        let durations: Vec<String> = service
            .durations
            .iter()
            .map(|option| format!("{} min {}", option.minutes, format_price(option.price_cents)))
            .collect();
        let inactive = if service.active { "" } else { " (inactive)" };
        println!(
            "{:<22} prep {:>2} min  {}{}  [{}]",
            service.name,
            service.preparation_time_minutes,
            durations.join(", "),
            inactive,
            service.id
        );
    }
}

async fn print_bookings(
    state: &Arc<DeskState>,
    day: NaiveDate,
    bookings: &[Booking],
) -> Result<()> {
    if bookings.is_empty() {
        println!("No bookings on {}", day);
        return Ok(());
    }

    for booking in bookings {
        let service = state
            .services
            .get_service_by_id(booking.service_id)
            .await?
            .map(|s| s.name)
            .unwrap_or_else(|| "Unknown service".to_string());
        println!(
            "{} - {}  {:<22} {:<16} room {:<5} {:<10} [{}]",
            booking.start_time.format("%H:%M"),
            booking.end_time.format("%H:%M"),
            service,
            booking.guest_name,
            booking.room_number.as_deref().unwrap_or("-"),
            booking.status,
            booking.id
        );
    }

    Ok(())
}

fn format_price(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
