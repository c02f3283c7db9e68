//! # Slot Availability
//!
//! Computes the start times a new spa booking can take on a given day.
//!
//! ## Algorithm
//!
//! 1. Build the business window for the day from the configured opening and
//!    closing hours
//! 2. Walk candidate start times through the window at the configured step
//! 3. Drop candidates whose end would fall after closing
//! 4. Drop candidates overlapping any existing booking's blocked interval,
//!    which is the booking extended by its service's preparation time
//! 5. Tag the remaining candidates that start in a peak hour
//!
//! The computation is pure. It reads the supplied bookings and returns a
//! fresh list on every call.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use tracing::debug;

use crate::{
    config::AvailabilityConfig,
    models::{
        service::SpaService,
        slot::{BookedWindow, CandidateSlot},
    },
};

/// Returns the bookable slots of `duration_minutes` for `service` on `day`,
/// earliest first.
///
/// A non-positive duration or an unusable configuration (closing at or
/// before opening, zero step) yields no slots.
///
/// # Time Complexity
///
/// O(C × B) where C is the number of candidate starts and B the number of
/// existing bookings.
pub fn compute_available_slots(
    day: NaiveDate,
    service: &SpaService,
    duration_minutes: i64,
    existing_bookings: &[BookedWindow],
    config: &AvailabilityConfig,
) -> Vec<CandidateSlot> {
    if duration_minutes <= 0 || !config.is_valid() {
        debug!(
            service_id = %service.id,
            duration_minutes,
            "No slots: non-positive duration or unusable business hours"
        );
        return Vec::new();
    }

    let midnight = day.and_time(NaiveTime::MIN);
    let day_start = midnight + Duration::hours(i64::from(config.business_start_hour));
    let day_end = midnight + Duration::hours(i64::from(config.business_end_hour));
    let step = Duration::minutes(i64::from(config.step_minutes));
    let duration = Duration::minutes(duration_minutes);

    let mut slots = Vec::new();
    let mut start = day_start;

    while start <= day_end {
        let end = start + duration;

        // Slot would run past closing
        if end > day_end {
            start += step;
            continue;
        }

        let blocked = existing_bookings
            .iter()
            .any(|window| overlaps(start, end, window));

        if !blocked {
            slots.push(CandidateSlot {
                start_time: start,
                end_time: end,
                is_peak_hour: config.is_peak_hour(start.hour()),
            });
        }

        start += step;
    }

    debug!(
        service_id = %service.id,
        %day,
        duration_minutes,
        bookings = existing_bookings.len(),
        available = slots.len(),
        "Computed available slots"
    );

    slots
}

/// Whether `[start, end)` collides with the blocked interval of `window`.
///
/// A candidate starting exactly when an existing booking starts always
/// collides, including zero-length bookings.
pub fn overlaps(start: NaiveDateTime, end: NaiveDateTime, window: &BookedWindow) -> bool {
    (start < window.blocked_until() && end > window.start_time) || start == window.start_time
}

/// Whether a booking of `duration_minutes` may start at `start`.
pub fn is_start_available(
    start: NaiveDateTime,
    service: &SpaService,
    duration_minutes: i64,
    existing_bookings: &[BookedWindow],
    config: &AvailabilityConfig,
) -> bool {
    compute_available_slots(
        start.date(),
        service,
        duration_minutes,
        existing_bookings,
        config,
    )
    .iter()
    .any(|slot| slot.start_time == start)
}
