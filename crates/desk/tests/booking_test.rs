
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use fake::{faker::name::en::Name, Fake};
use hotelops_core::{
    config::AvailabilityConfig,
    errors::SpaError,
    models::{
        booking::{Booking, BookingStatus},
        service::{ServiceCategory, SpaService},
    },
};
use hotelops_db::{
    create_store,
    repositories::booking::{BookingRepository, InMemoryBookingRepository},
    seed::{demo_booking_id, demo_catalog, SWEDISH_MASSAGE_ID},
    Store,
};
use hotelops_desk::{
    handlers::{
        availability::{available_slots, SlotQuery},
        booking::{create_booking, list_bookings, update_booking_status},
    },
    DeskState,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use uuid::Uuid;

use crate::test_utils::{booking_request, seeded_state, test_day, time};

async fn swedish_starts(state: &hotelops_desk::DeskState) -> Vec<chrono::NaiveTime> {
    available_slots(
        state,
        SlotQuery {
            date: test_day(),
            service_id: SWEDISH_MASSAGE_ID,
            duration_minutes: 60,
        },
    )
    .await
    .unwrap()
    .slots
    .iter()
    .map(|slot| slot.start_time.time())
    .collect()
}

#[test_log::test(tokio::test)]
async fn test_create_booking_takes_the_slot() {
    let state = seeded_state().await;
    let guest: String = Name().fake();

    let booking = create_booking(
        &state,
        booking_request(SWEDISH_MASSAGE_ID, time(11, 30), 60, &guest),
    )
    .await
    .unwrap();

    assert_eq!(booking.guest_name, guest.trim());
    assert_eq!(booking.status, BookingStatus::Booked);
    assert_eq!(booking.price_cents, 12000);
    assert_eq!(booking.start_time, test_day().and_time(time(11, 30)));
    assert_eq!(booking.end_time, test_day().and_time(time(12, 30)));
    assert_eq!(booking.room_number.as_deref(), Some("512"));
    assert_eq!(booking.notes, None);

    assert_eq!(swedish_starts(&state).await, vec![time(9, 0), time(16, 0)]);
    assert_eq!(list_bookings(&state, test_day()).await.unwrap().len(), 5);
}

#[tokio::test]
async fn test_same_slot_cannot_be_booked_twice() {
    let state = seeded_state().await;
    let request = booking_request(SWEDISH_MASSAGE_ID, time(16, 0), 60, "Ada Park");

    create_booking(&state, request.clone()).await.unwrap();
    let result = create_booking(&state, request).await;

    assert!(matches!(result, Err(SpaError::SlotUnavailable(_))));
}

/// Hands control back to the runtime after every day lookup, so concurrent
/// requests interleave between reading the day and inserting.
struct YieldingBookingRepository(InMemoryBookingRepository);

#[async_trait]
impl BookingRepository for YieldingBookingRepository {
    async fn create_booking(&self, booking: Booking) -> eyre::Result<Booking> {
        self.0.create_booking(booking).await
    }

    async fn get_booking_by_id(&self, id: Uuid) -> eyre::Result<Option<Booking>> {
        self.0.get_booking_by_id(id).await
    }

    async fn get_bookings_for_day(&self, day: NaiveDate) -> eyre::Result<Vec<Booking>> {
        let bookings = self.0.get_bookings_for_day(day).await?;
        tokio::task::yield_now().await;
        Ok(bookings)
    }

    async fn update_booking(&self, booking: Booking) -> eyre::Result<Booking> {
        self.0.update_booking(booking).await
    }
}

#[tokio::test]
async fn test_concurrent_requests_for_one_slot_book_it_once() {
    let store = create_store();
    for service in demo_catalog() {
        store.services.add_service(service).await.unwrap();
    }
    let state = DeskState::new(
        Store {
            bookings: Arc::new(YieldingBookingRepository(InMemoryBookingRepository::new())),
            services: store.services,
        },
        AvailabilityConfig::default(),
    );

    let (first, second) = tokio::join!(
        create_booking(
            &state,
            booking_request(SWEDISH_MASSAGE_ID, time(16, 0), 60, "Ada Park"),
        ),
        create_booking(
            &state,
            booking_request(SWEDISH_MASSAGE_ID, time(16, 0), 60, "Ben Ortiz"),
        ),
    );

    let results = [first, second];
    assert_eq!(results.iter().filter(|result| result.is_ok()).count(), 1);
    assert!(results
        .iter()
        .any(|result| matches!(result, Err(SpaError::SlotUnavailable(_)))));

    let bookings = list_bookings(&state, test_day()).await.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].start_time, test_day().and_time(time(16, 0)));
}

#[rstest]
#[case(time(10, 30))]
#[case(time(11, 0))]
#[case(time(9, 15))]
#[case(time(18, 30))]
#[tokio::test]
async fn test_unavailable_start_is_rejected(#[case] start: chrono::NaiveTime) {
    let state = seeded_state().await;

    let result = create_booking(
        &state,
        booking_request(SWEDISH_MASSAGE_ID, start, 60, "Ada Park"),
    )
    .await;

    assert!(matches!(result, Err(SpaError::SlotUnavailable(_))));
}

#[tokio::test]
async fn test_blank_guest_name_is_rejected() {
    let state = seeded_state().await;

    let result = create_booking(
        &state,
        booking_request(SWEDISH_MASSAGE_ID, time(9, 0), 60, "   "),
    )
    .await;

    assert!(matches!(result, Err(SpaError::Validation(_))));
}

#[tokio::test]
async fn test_inactive_service_is_rejected() {
    let state = seeded_state().await;
    let retired = SpaService {
        id: Uuid::new_v4(),
        name: "Mud Wrap".to_string(),
        category: ServiceCategory::Body,
        preparation_time_minutes: 20,
        durations: Vec::new(),
        active: false,
    };
    state.services.add_service(retired.clone()).await.unwrap();

    let result = create_booking(
        &state,
        booking_request(retired.id, time(9, 0), 60, "Ada Park"),
    )
    .await;

    assert!(matches!(result, Err(SpaError::Validation(_))));
}

#[tokio::test]
async fn test_status_transitions() {
    let state = seeded_state().await;
    let id = demo_booking_id(test_day(), 0xb001);

    let completed = update_booking_status(&state, id, BookingStatus::Completed)
        .await
        .unwrap();
    assert_eq!(completed.status, BookingStatus::Completed);

    let result = update_booking_status(&state, id, BookingStatus::Cancelled).await;
    assert!(matches!(
        result,
        Err(SpaError::InvalidTransition {
            from: BookingStatus::Completed,
            to: BookingStatus::Cancelled,
        })
    ));
}

#[tokio::test]
async fn test_unknown_booking_is_not_found() {
    let state = seeded_state().await;

    let result = update_booking_status(&state, Uuid::new_v4(), BookingStatus::NoShow).await;

    assert!(matches!(result, Err(SpaError::NotFound(_))));
}

#[tokio::test]
async fn test_cancelled_booking_still_blocks() {
    let state = seeded_state().await;
    let before = swedish_starts(&state).await;

    update_booking_status(&state, demo_booking_id(test_day(), 0xb001), BookingStatus::Cancelled)
        .await
        .unwrap();

    assert_eq!(swedish_starts(&state).await, before);
}

#[tokio::test]
async fn test_list_bookings_is_sorted() {
    let state = seeded_state().await;

    let bookings = list_bookings(&state, test_day()).await.unwrap();
    let starts: Vec<_> = bookings.iter().map(|b| b.start_time.time()).collect();

    assert_eq!(starts, vec![time(10, 0), time(12, 30), time(14, 0), time(17, 0)]);
    assert!(list_bookings(&state, test_day().succ_opt().unwrap())
        .await
        .unwrap()
        .is_empty());
}
