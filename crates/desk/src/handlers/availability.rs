//! # Availability Handlers
//!
//! Answers "when can this guest book this treatment for this long?" for a
//! single day.
//!
//! The handler gathers the inputs the slot computer needs:
//!
//! 1. Resolve the requested service and check the duration is on its menu
//! 2. Load the day's bookings, plus the previous day's when their
//!    preparation time runs past midnight
//! 3. Resolve each booking's preparation time from its own service
//! 4. Run the slot computation over the resulting booked windows
//!
//! Booking status is not consulted: every stored booking of the day blocks
//! its interval.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};
use hotelops_core::{
    availability::compute_available_slots,
    errors::{SpaError, SpaResult},
    models::{
        booking::Booking,
        service::SpaService,
        slot::{BookedWindow, CandidateSlot},
    },
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::DeskState;

/// Parameters for a slot lookup
#[derive(Debug, Clone, Deserialize)]
pub struct SlotQuery {
    pub date: NaiveDate,
    pub service_id: Uuid,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotResponse {
    pub date: NaiveDate,
    pub service_id: Uuid,
    pub service_name: String,
    pub duration_minutes: u32,
    pub slots: Vec<CandidateSlot>,
}

/// Lists the bookable slots for a service and duration on a day.
///
/// # Errors
///
/// * `SpaError::NotFound` - Unknown service
/// * `SpaError::Validation` - Duration not offered by the service
/// * `SpaError::Storage` - Repository failure
pub async fn available_slots(state: &DeskState, query: SlotQuery) -> SpaResult<SlotResponse> {
    let service = get_service(state, query.service_id).await?;
    ensure_duration_offered(&service, query.duration_minutes)?;

    let windows = day_windows(state, query.date).await?;

    let slots = compute_available_slots(
        query.date,
        &service,
        i64::from(query.duration_minutes),
        &windows,
        &state.availability,
    );

    Ok(SlotResponse {
        date: query.date,
        service_id: service.id,
        service_name: service.name,
        duration_minutes: query.duration_minutes,
        slots,
    })
}

pub(crate) async fn get_service(state: &DeskState, id: Uuid) -> SpaResult<SpaService> {
    state
        .services
        .get_service_by_id(id)
        .await?
        .ok_or_else(|| SpaError::NotFound(format!("Service with ID {} not found", id)))
}

pub(crate) fn ensure_duration_offered(service: &SpaService, minutes: u32) -> SpaResult<()> {
    if service.offers_duration(minutes) {
        return Ok(());
    }

    let offered: Vec<String> = service
        .durations
        .iter()
        .map(|option| option.minutes.to_string())
        .collect();
    Err(SpaError::Validation(format!(
        "{} is not offered for {} minutes (available: {})",
        service.name,
        minutes,
        offered.join(", ")
    )))
}

/// Booked windows that can block a start on `day`.
///
/// Bookings are stored under the day they start on, so a late booking on the
/// previous day whose preparation time crosses midnight is pulled in too.
pub(crate) async fn day_windows(state: &DeskState, day: NaiveDate) -> SpaResult<Vec<BookedWindow>> {
    let bookings = state.bookings.get_bookings_for_day(day).await?;
    let mut windows = booked_windows(state, &bookings).await?;

    if let Some(previous) = day.pred_opt() {
        let midnight = day.and_time(NaiveTime::MIN);
        let earlier = state.bookings.get_bookings_for_day(previous).await?;
        let spill: Vec<BookedWindow> = booked_windows(state, &earlier)
            .await?
            .into_iter()
            .filter(|window| window.start_time < midnight && window.blocked_until() > midnight)
            .collect();

        if !spill.is_empty() {
            debug!("{} bookings from {} block past midnight", spill.len(), previous);
            windows.extend(spill);
        }
    }

    Ok(windows)
}

/// Pairs each booking with the preparation time of its service.
///
/// A booking whose service has left the catalog blocks only its own interval.
pub(crate) async fn booked_windows(
    state: &DeskState,
    bookings: &[Booking],
) -> SpaResult<Vec<BookedWindow>> {
    let mut preparation: HashMap<Uuid, u32> = HashMap::new();
    let mut windows = Vec::with_capacity(bookings.len());

    for booking in bookings {
        let minutes = match preparation.get(&booking.service_id) {
            Some(minutes) => *minutes,
            None => {
                let minutes = match state.services.get_service_by_id(booking.service_id).await? {
                    Some(service) => service.preparation_time_minutes,
                    None => {
                        warn!(
                            booking_id = %booking.id,
                            service_id = %booking.service_id,
                            "Booking references an unknown service, assuming no preparation time"
                        );
                        0
                    }
                };
                preparation.insert(booking.service_id, minutes);
                minutes
            }
        };

        windows.push(BookedWindow::new(booking.start_time, booking.end_time, minutes));
    }

    debug!("Resolved {} booked windows", windows.len());
    Ok(windows)
}
