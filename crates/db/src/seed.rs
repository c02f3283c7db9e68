//! Deterministic demo data: a small treatment menu and a handful of
//! bookings for any requested day. Ids are fixed so bookings can be
//! addressed across runs.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use eyre::{eyre, Result};
use hotelops_core::models::{
    booking::{Booking, BookingStatus},
    service::{DurationOption, ServiceCategory, SpaService},
};
use tracing::info;
use uuid::Uuid;

use crate::Store;

pub const SWEDISH_MASSAGE_ID: Uuid = Uuid::from_u128(0x5a01);
pub const DEEP_TISSUE_ID: Uuid = Uuid::from_u128(0x5a02);
pub const HOT_STONE_ID: Uuid = Uuid::from_u128(0x5a03);
pub const HYDRATING_FACIAL_ID: Uuid = Uuid::from_u128(0x5a04);
pub const AROMATHERAPY_ID: Uuid = Uuid::from_u128(0x5a05);

fn option(minutes: u32, price_cents: u64) -> DurationOption {
    DurationOption {
        minutes,
        price_cents,
    }
}

pub fn demo_catalog() -> Vec<SpaService> {
    vec![
        SpaService {
            id: SWEDISH_MASSAGE_ID,
            name: "Swedish Massage".to_string(),
            category: ServiceCategory::Massage,
            preparation_time_minutes: 15,
            durations: vec![option(60, 12000), option(90, 16500)],
            active: true,
        },
        SpaService {
            id: DEEP_TISSUE_ID,
            name: "Deep Tissue Massage".to_string(),
            category: ServiceCategory::Massage,
            preparation_time_minutes: 15,
            durations: vec![option(60, 13500), option(90, 18500)],
            active: true,
        },
        SpaService {
            id: HOT_STONE_ID,
            name: "Hot Stone Therapy".to_string(),
            category: ServiceCategory::Body,
            preparation_time_minutes: 30,
            durations: vec![option(90, 19500)],
            active: true,
        },
        SpaService {
            id: HYDRATING_FACIAL_ID,
            name: "Hydrating Facial".to_string(),
            category: ServiceCategory::Facial,
            preparation_time_minutes: 10,
            durations: vec![option(30, 6500), option(60, 11000)],
            active: true,
        },
        SpaService {
            id: AROMATHERAPY_ID,
            name: "Aromatherapy".to_string(),
            category: ServiceCategory::Wellness,
            preparation_time_minutes: 15,
            durations: vec![option(60, 11500)],
            active: true,
        },
    ]
}

struct DemoBooking {
    id: u128,
    service_id: Uuid,
    guest: &'static str,
    room: Option<&'static str>,
    therapist: &'static str,
    start: (u32, u32),
    minutes: u32,
}

const DEMO_BOOKINGS: [DemoBooking; 4] = [
    DemoBooking {
        id: 0xb001,
        service_id: SWEDISH_MASSAGE_ID,
        guest: "Emma Thompson",
        room: Some("301"),
        therapist: "Sofia",
        start: (10, 0),
        minutes: 60,
    },
    DemoBooking {
        id: 0xb002,
        service_id: HYDRATING_FACIAL_ID,
        guest: "Liam Chen",
        room: Some("118"),
        therapist: "Maya",
        start: (12, 30),
        minutes: 30,
    },
    DemoBooking {
        id: 0xb003,
        service_id: HOT_STONE_ID,
        guest: "Olivia Garcia",
        room: Some("301"),
        therapist: "Sofia",
        start: (14, 0),
        minutes: 90,
    },
    DemoBooking {
        id: 0xb004,
        service_id: AROMATHERAPY_ID,
        guest: "Noah Williams",
        room: None,
        therapist: "Maya",
        start: (17, 0),
        minutes: 60,
    },
];

/// Demo bookings on `day`, priced from `catalog`.
///
/// Booking ids depend on the day so different days never collide.
pub fn demo_bookings(day: NaiveDate, catalog: &[SpaService]) -> Result<Vec<Booking>> {
    let created_at: DateTime<Utc> = day
        .pred_opt()
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .ok_or_else(|| eyre!("Cannot seed bookings for {}", day))?
        .and_utc();

    DEMO_BOOKINGS
        .iter()
        .map(|demo| -> Result<Booking> {
            let service = catalog
                .iter()
                .find(|service| service.id == demo.service_id)
                .ok_or_else(|| eyre!("Demo service {} missing from catalog", demo.service_id))?;
            let price_cents = service
                .duration_option(demo.minutes)
                .map(|option| option.price_cents)
                .unwrap_or_default();

            let (hour, minute) = demo.start;
            let start_time = day.and_time(
                NaiveTime::from_hms_opt(hour, minute, 0)
                    .ok_or_else(|| eyre!("Invalid demo start {}:{}", hour, minute))?,
            );

            Ok(Booking {
                id: demo_booking_id(day, demo.id),
                service_id: demo.service_id,
                guest_name: demo.guest.to_string(),
                room_number: demo.room.map(str::to_string),
                therapist: Some(demo.therapist.to_string()),
                start_time,
                end_time: start_time + Duration::minutes(i64::from(demo.minutes)),
                price_cents,
                status: BookingStatus::Booked,
                notes: None,
                created_at,
            })
        })
        .collect()
}

/// Id of a demo booking: the day number in the high bits, the booking tag in
/// the low bits.
pub fn demo_booking_id(day: NaiveDate, tag: u128) -> Uuid {
    let day_number = u128::from(day.num_days_from_ce().unsigned_abs());
    Uuid::from_u128((day_number << 64) | tag)
}

/// Loads the demo catalog and the demo bookings for `day` into `store`.
pub async fn seed_store(store: &Store, day: NaiveDate) -> Result<()> {
    let catalog = demo_catalog();
    for service in &catalog {
        store.services.add_service(service.clone()).await?;
    }

    let bookings = demo_bookings(day, &catalog)?;
    let count = bookings.len();
    for booking in bookings {
        store.bookings.create_booking(booking).await?;
    }

    info!("Seeded {} services and {} bookings for {}", catalog.len(), count, day);
    Ok(())
}
