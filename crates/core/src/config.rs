//! # Availability Configuration
//!
//! Business hours, candidate step size and peak hours used by the slot
//! computer. Values come from environment variables with defaults for
//! anything unset.
//!
//! ## Environment Variables
//!
//! - `SPA_BUSINESS_START_HOUR`: opening hour (default: 9)
//! - `SPA_BUSINESS_END_HOUR`: closing hour, at most 24 (default: 19)
//! - `SPA_SLOT_STEP_MINUTES`: spacing between candidate starts (default: 30)
//! - `SPA_PEAK_HOURS`: comma-separated peak hours (default: "10,11,16,17")

use std::collections::BTreeSet;
use std::env;
use std::str::FromStr;

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BUSINESS_START_HOUR: u32 = 9;
pub const DEFAULT_BUSINESS_END_HOUR: u32 = 19;
pub const DEFAULT_STEP_MINUTES: u32 = 30;
pub const DEFAULT_PEAK_HOURS: [u32; 4] = [10, 11, 16, 17];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityConfig {
    pub business_start_hour: u32,
    pub business_end_hour: u32,
    pub step_minutes: u32,
    pub peak_hours: BTreeSet<u32>,
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            business_start_hour: DEFAULT_BUSINESS_START_HOUR,
            business_end_hour: DEFAULT_BUSINESS_END_HOUR,
            step_minutes: DEFAULT_STEP_MINUTES,
            peak_hours: DEFAULT_PEAK_HOURS.into_iter().collect(),
        }
    }
}

impl AvailabilityConfig {
    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Fails when a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads the configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let business_start_hour = parse_or(
            &lookup,
            "SPA_BUSINESS_START_HOUR",
            defaults.business_start_hour,
        )?;
        let business_end_hour =
            parse_or(&lookup, "SPA_BUSINESS_END_HOUR", defaults.business_end_hour)?;
        let step_minutes = parse_or(&lookup, "SPA_SLOT_STEP_MINUTES", defaults.step_minutes)?;

        let peak_hours = match lookup("SPA_PEAK_HOURS") {
            Some(raw) => parse_hours(&raw).wrap_err("Invalid SPA_PEAK_HOURS value")?,
            None => defaults.peak_hours,
        };

        Ok(Self {
            business_start_hour,
            business_end_hour,
            step_minutes,
            peak_hours,
        })
    }

    /// Whether the configuration can produce any slot at all.
    pub fn is_valid(&self) -> bool {
        self.business_start_hour < self.business_end_hour
            && self.business_end_hour <= 24
            && self.step_minutes > 0
    }

    pub fn is_peak_hour(&self, hour: u32) -> bool {
        self.peak_hours.contains(&hour)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .wrap_err_with(|| format!("Invalid {} value: {:?}", key, raw)),
        None => Ok(default),
    }
}

fn parse_hours(raw: &str) -> Result<BTreeSet<u32>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| -> Result<u32> {
            let hour: u32 = s.parse().wrap_err_with(|| format!("not an hour: {:?}", s))?;
            if hour > 23 {
                eyre::bail!("hour out of range: {}", hour);
            }
            Ok(hour)
        })
        .collect()
}
