use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceCategory {
    Massage,
    Facial,
    Body,
    Wellness,
}

/// A selectable length for a service, priced per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationOption {
    pub minutes: u32,
    pub price_cents: u64,
}

/// A bookable spa treatment.
///
/// `preparation_time_minutes` is the cleanup/reset time the treatment room
/// needs after a session ends before it can be booked again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaService {
    pub id: Uuid,
    pub name: String,
    pub category: ServiceCategory,
    pub preparation_time_minutes: u32,
    #[serde(default)]
    pub durations: Vec<DurationOption>,
    pub active: bool,
}

impl SpaService {
    pub fn duration_option(&self, minutes: u32) -> Option<&DurationOption> {
        self.durations.iter().find(|option| option.minutes == minutes)
    }

    /// Services without a duration menu accept any positive length.
    pub fn offers_duration(&self, minutes: u32) -> bool {
        if self.durations.is_empty() {
            return minutes > 0;
        }
        self.duration_option(minutes).is_some()
    }
}
