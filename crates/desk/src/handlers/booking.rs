//! Booking creation and status updates.

use chrono::{NaiveDate, Utc};
use hotelops_core::{
    availability::is_start_available,
    errors::{SpaError, SpaResult},
    models::booking::{Booking, BookingStatus, CreateBookingRequest},
};
use tracing::info;
use uuid::Uuid;

use super::availability::{day_windows, ensure_duration_offered, get_service};
use crate::DeskState;

/// Books a session at a start time the slot computer currently offers.
///
/// # Errors
///
/// * `SpaError::Validation` - Empty guest name, inactive service or duration
///   not on the menu
/// * `SpaError::NotFound` - Unknown service
/// * `SpaError::SlotUnavailable` - The start time is not an available slot
/// * `SpaError::Storage` - Repository failure
///
/// The availability check and the insert run under the desk's booking lock,
/// so two requests for the same slot cannot both succeed.
pub async fn create_booking(
    state: &DeskState,
    request: CreateBookingRequest,
) -> SpaResult<Booking> {
    let guest_name = request.guest_name.trim();
    if guest_name.is_empty() {
        return Err(SpaError::Validation("Guest name is required".to_string()));
    }

    let service = get_service(state, request.service_id).await?;
    if !service.active {
        return Err(SpaError::Validation(format!(
            "{} is not currently offered",
            service.name
        )));
    }
    ensure_duration_offered(&service, request.duration_minutes)?;

    let start_time = request.date.and_time(request.start_time);
    let duration = i64::from(request.duration_minutes);

    let _guard = state.booking_lock.lock().await;
    let windows = day_windows(state, request.date).await?;

    if !is_start_available(start_time, &service, duration, &windows, &state.availability) {
        return Err(SpaError::SlotUnavailable(format!(
            "{} at {} for {} minutes",
            service.name,
            start_time.format("%Y-%m-%d %H:%M"),
            duration
        )));
    }

    let price_cents = service
        .duration_option(request.duration_minutes)
        .map(|option| option.price_cents)
        .unwrap_or_default();

    let booking = Booking {
        id: Uuid::new_v4(),
        service_id: service.id,
        guest_name: guest_name.to_string(),
        room_number: non_empty(request.room_number),
        therapist: non_empty(request.therapist),
        start_time,
        end_time: start_time + chrono::Duration::minutes(duration),
        price_cents,
        status: BookingStatus::Booked,
        notes: non_empty(request.notes),
        created_at: Utc::now(),
    };

    let booking = state.bookings.create_booking(booking).await?;
    info!(
        booking_id = %booking.id,
        service = %service.name,
        start = %booking.start_time,
        "Booking created"
    );

    Ok(booking)
}

/// Moves a booking to a new status.
///
/// # Errors
///
/// * `SpaError::NotFound` - Unknown booking
/// * `SpaError::InvalidTransition` - The booking is no longer `booked`, or
///   the target is `booked`
pub async fn update_booking_status(
    state: &DeskState,
    id: Uuid,
    status: BookingStatus,
) -> SpaResult<Booking> {
    let mut booking = state
        .bookings
        .get_booking_by_id(id)
        .await?
        .ok_or_else(|| SpaError::NotFound(format!("Booking with ID {} not found", id)))?;

    let previous = booking.status;
    booking.transition(status)?;
    let booking = state.bookings.update_booking(booking).await?;

    info!(booking_id = %id, from = %previous, to = %status, "Booking status updated");
    Ok(booking)
}

/// All bookings starting on `day`, earliest first.
pub async fn list_bookings(state: &DeskState, day: NaiveDate) -> SpaResult<Vec<Booking>> {
    Ok(state.bookings.get_bookings_for_day(day).await?)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
