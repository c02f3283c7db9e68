//! # hotelops desk
//!
//! Spa front-desk operations for the hotel dashboard: listing bookable
//! slots, taking and updating bookings, and the daily spa report.
//!
//! ## Architecture
//!
//! - **Handlers**: one function per desk operation, working against the
//!   repositories held in [`DeskState`]
//! - **Config**: environment configuration for logging, business hours and
//!   demo data
//!
//! The slot computation itself lives in `hotelops-core` and never touches
//! storage. Handlers load what it needs and pass it in.

/// Configuration module for desk settings
pub mod config;
/// Desk operations
pub mod handlers;

use std::sync::Arc;

use chrono::NaiveDate;
use eyre::Result;
use hotelops_core::config::AvailabilityConfig;
use hotelops_db::{
    create_store,
    repositories::{booking::BookingRepository, service::ServiceCatalog},
    seed::seed_store,
    Store,
};
use tokio::sync::Mutex;
use tracing::info;

/// Shared state accessible to every desk operation
///
/// # Example
///
/// ```ignore
/// let state = Arc::new(DeskState::new(create_store(), AvailabilityConfig::default()));
/// let slots = handlers::availability::available_slots(&state, query).await?;
/// ```
pub struct DeskState {
    /// Booking storage
    pub bookings: Arc<dyn BookingRepository>,
    /// Treatment menu with preparation times
    pub services: Arc<dyn ServiceCatalog>,
    /// Business hours, step size and peak hours
    pub availability: AvailabilityConfig,
    /// Serializes the availability check and insert of new bookings
    pub(crate) booking_lock: Mutex<()>,
}

impl DeskState {
    pub fn new(store: Store, availability: AvailabilityConfig) -> Self {
        Self {
            bookings: store.bookings,
            services: store.services,
            availability,
            booking_lock: Mutex::new(()),
        }
    }
}

/// Builds the desk state from configuration, seeding demo data for `day`
/// when enabled.
pub async fn init_state(config: &config::DeskConfig, day: NaiveDate) -> Result<Arc<DeskState>> {
    let store = create_store();

    if config.demo_data {
        seed_store(&store, day).await?;
    } else {
        info!("Starting with an empty spa store");
    }

    Ok(Arc::new(DeskState::new(store, config.availability.clone())))
}
