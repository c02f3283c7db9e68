//! # Desk Configuration Module
//!
//! Loads configuration for the spa desk from environment variables.
//!
//! ## Environment Variables
//!
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `HOTELOPS_DEMO_DATA`: Seed the demo catalog and bookings (default: "true")
//! - `SPA_*`: business hours and peak hours, see
//!   [`hotelops_core::config::AvailabilityConfig`]

use std::env;

use eyre::{Result, WrapErr};
use hotelops_core::config::AvailabilityConfig;
use tracing::Level;

/// Configuration for the spa desk
#[derive(Debug, Clone)]
pub struct DeskConfig {
    /// Log level for the application
    pub log_level: Level,

    /// Whether to seed demo data on startup
    pub demo_data: bool,

    /// Slot computation settings
    pub availability: AvailabilityConfig,
}

impl DeskConfig {
    /// Creates a new DeskConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - `HOTELOPS_DEMO_DATA` is not a boolean
    /// - Any `SPA_*` value cannot be parsed
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Logging settings
        let log_level = match lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .to_ascii_lowercase()
            .as_str()
        {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let demo_data = match lookup("HOTELOPS_DEMO_DATA") {
            Some(raw) => parse_flag(&raw).wrap_err("Invalid HOTELOPS_DEMO_DATA value")?,
            None => true,
        };

        let availability = AvailabilityConfig::from_lookup(&lookup)?;

        Ok(Self {
            log_level,
            demo_data,
            availability,
        })
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(eyre::eyre!("expected a boolean, got {:?}", other)),
    }
}
