use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::{eyre, Result};
use hotelops_core::models::booking::Booking;
use tokio::sync::RwLock;
use uuid::Uuid;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create_booking(&self, booking: Booking) -> Result<Booking>;

    async fn get_booking_by_id(&self, id: Uuid) -> Result<Option<Booking>>;

    /// Bookings starting on `day`, earliest first.
    async fn get_bookings_for_day(&self, day: NaiveDate) -> Result<Vec<Booking>>;

    /// Replaces a stored booking. Fails if the id is unknown.
    async fn update_booking(&self, booking: Booking) -> Result<Booking>;
}

#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    bookings: RwLock<HashMap<Uuid, Booking>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn create_booking(&self, booking: Booking) -> Result<Booking> {
        tracing::debug!(
            "Creating booking: id={}, service_id={}, start={}",
            booking.id,
            booking.service_id,
            booking.start_time
        );

        let mut bookings = self.bookings.write().await;
        if bookings.contains_key(&booking.id) {
            return Err(eyre!("Booking {} already exists", booking.id));
        }
        bookings.insert(booking.id, booking.clone());

        Ok(booking)
    }

    async fn get_booking_by_id(&self, id: Uuid) -> Result<Option<Booking>> {
        tracing::debug!("Getting booking by id: {}", id);

        Ok(self.bookings.read().await.get(&id).cloned())
    }

    async fn get_bookings_for_day(&self, day: NaiveDate) -> Result<Vec<Booking>> {
        let mut bookings: Vec<Booking> = self
            .bookings
            .read()
            .await
            .values()
            .filter(|booking| booking.date() == day)
            .cloned()
            .collect();
        bookings.sort_by_key(|booking| (booking.start_time, booking.id));

        tracing::debug!("Found {} bookings for {}", bookings.len(), day);
        Ok(bookings)
    }

    async fn update_booking(&self, booking: Booking) -> Result<Booking> {
        let mut bookings = self.bookings.write().await;
        let stored = bookings
            .get_mut(&booking.id)
            .ok_or_else(|| eyre!("Booking {} does not exist", booking.id))?;
        *stored = booking.clone();

        tracing::debug!("Booking updated: id={}, status={}", booking.id, booking.status);
        Ok(booking)
    }
}
