use async_trait::async_trait;
use chrono::NaiveDate;
use hotelops_core::models::{booking::Booking, service::SpaService};
use mockall::mock;
use uuid::Uuid;

use crate::repositories::{booking::BookingRepository, service::ServiceCatalog};

// Mock repositories for testing
mock! {
    pub BookingRepo {}

    #[async_trait]
    impl BookingRepository for BookingRepo {
        async fn create_booking(&self, booking: Booking) -> eyre::Result<Booking>;

        async fn get_booking_by_id(&self, id: Uuid) -> eyre::Result<Option<Booking>>;

        async fn get_bookings_for_day(&self, day: NaiveDate) -> eyre::Result<Vec<Booking>>;

        async fn update_booking(&self, booking: Booking) -> eyre::Result<Booking>;
    }
}

mock! {
    pub ServiceRepo {}

    #[async_trait]
    impl ServiceCatalog for ServiceRepo {
        async fn add_service(&self, service: SpaService) -> eyre::Result<SpaService>;

        async fn list_services(&self) -> eyre::Result<Vec<SpaService>>;

        async fn get_service_by_id(&self, id: Uuid) -> eyre::Result<Option<SpaService>>;

        async fn find_service_by_name(&self, name: &str) -> eyre::Result<Option<SpaService>>;
    }
}
