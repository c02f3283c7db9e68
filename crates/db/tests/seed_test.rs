use chrono::NaiveDate;
use hotelops_core::{
    availability::overlaps,
    models::{booking::BookingStatus, slot::BookedWindow},
};
use hotelops_db::{
    create_store,
    seed::{demo_booking_id, demo_bookings, demo_catalog, seed_store, SWEDISH_MASSAGE_ID},
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn test_demo_catalog_is_well_formed() {
    let catalog = demo_catalog();

    assert_eq!(catalog.len(), 5);
    for service in &catalog {
        assert!(!service.durations.is_empty(), "{} has no durations", service.name);
        assert!(service.durations.iter().all(|option| option.minutes > 0));
    }
}

#[rstest]
#[case(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap())]
#[case(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap())]
fn test_demo_bookings_do_not_overlap(#[case] day: NaiveDate) {
    let catalog = demo_catalog();
    let bookings = demo_bookings(day, &catalog).unwrap();

    assert_eq!(bookings.len(), 4);
    for (i, booking) in bookings.iter().enumerate() {
        assert_eq!(booking.date(), day);
        assert_eq!(booking.status, BookingStatus::Booked);
        assert!(booking.price_cents > 0);

        let service = catalog.iter().find(|s| s.id == booking.service_id).unwrap();
        let window = BookedWindow::for_booking(booking, service);
        for other in bookings.iter().skip(i + 1) {
            assert!(!overlaps(other.start_time, other.end_time, &window));
        }
    }
}

#[test]
fn test_demo_booking_ids_are_stable_per_day() {
    let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let next = day.succ_opt().unwrap();

    assert_eq!(demo_booking_id(day, 1), demo_booking_id(day, 1));
    assert_ne!(demo_booking_id(day, 1), demo_booking_id(next, 1));
    assert_ne!(demo_booking_id(day, 1), demo_booking_id(day, 2));
}

#[tokio::test]
async fn test_seed_store() {
    let day = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let store = create_store();

    seed_store(&store, day).await.unwrap();

    assert_eq!(store.services.list_services().await.unwrap().len(), 5);
    assert_eq!(store.bookings.get_bookings_for_day(day).await.unwrap().len(), 4);
    assert!(store
        .services
        .get_service_by_id(SWEDISH_MASSAGE_ID)
        .await
        .unwrap()
        .is_some());
}
