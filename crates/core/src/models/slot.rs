use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{booking::Booking, service::SpaService};

/// A potential start/end pair for a new booking. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSlot {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub is_peak_hour: bool,
}

/// An existing booking's interval together with the preparation time of
/// its service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedWindow {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub preparation_time_minutes: u32,
}

impl BookedWindow {
    pub fn new(
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        preparation_time_minutes: u32,
    ) -> Self {
        Self {
            start_time,
            end_time,
            preparation_time_minutes,
        }
    }

    pub fn for_booking(booking: &Booking, service: &SpaService) -> Self {
        Self::new(
            booking.start_time,
            booking.end_time,
            service.preparation_time_minutes,
        )
    }

    /// End of the blocked interval: booking end plus preparation time.
    pub fn blocked_until(&self) -> NaiveDateTime {
        self.end_time + Duration::minutes(i64::from(self.preparation_time_minutes))
    }
}
