//! In-memory storage for the spa desk.
//!
//! Repositories are async traits so a persisted store can replace the
//! in-memory one without touching callers. Nothing survives the process.

pub mod repositories;
pub mod seed;

pub mod mock;

use std::sync::Arc;

use repositories::{
    booking::{BookingRepository, InMemoryBookingRepository},
    service::{InMemoryServiceCatalog, ServiceCatalog},
};

/// Handles to both repositories behind trait objects.
#[derive(Clone)]
pub struct Store {
    pub bookings: Arc<dyn BookingRepository>,
    pub services: Arc<dyn ServiceCatalog>,
}

/// Creates an empty in-memory store.
pub fn create_store() -> Store {
    Store {
        bookings: Arc::new(InMemoryBookingRepository::new()),
        services: Arc::new(InMemoryServiceCatalog::new()),
    }
}
