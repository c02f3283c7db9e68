//! Daily spa report: booking counts and revenue grouped by status, service
//! and guest room.

use std::collections::{BTreeMap, HashMap};

use chrono::{NaiveDate, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::AvailabilityConfig,
    models::{
        booking::{Booking, BookingStatus},
        service::SpaService,
    },
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub service_id: Uuid,
    pub service_name: String,
    pub bookings: usize,
    pub booked_minutes: i64,
    pub revenue_cents: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySpaReport {
    pub date: NaiveDate,
    pub total_bookings: usize,
    pub by_status: BTreeMap<BookingStatus, usize>,
    pub by_service: BTreeMap<Uuid, ServiceSummary>,
    pub by_room: BTreeMap<String, usize>,
    pub peak_hour_bookings: usize,
    pub revenue_cents: u64,
}

/// Builds the report for `day` from the bookings that start on it.
///
/// Revenue only counts completed sessions. `by_service` is keyed by service
/// id; bookings whose service is not in `services` are named
/// "Unknown service".
pub fn build_daily_report(
    day: NaiveDate,
    bookings: &[Booking],
    services: &[SpaService],
    config: &AvailabilityConfig,
) -> DailySpaReport {
    let names: HashMap<Uuid, &str> = services
        .iter()
        .map(|service| (service.id, service.name.as_str()))
        .collect();

    let mut report = DailySpaReport {
        date: day,
        total_bookings: 0,
        by_status: BTreeMap::new(),
        by_service: BTreeMap::new(),
        by_room: BTreeMap::new(),
        peak_hour_bookings: 0,
        revenue_cents: 0,
    };

    for booking in bookings.iter().filter(|b| b.date() == day) {
        report.total_bookings += 1;
        *report.by_status.entry(booking.status).or_default() += 1;

        let revenue = if booking.status == BookingStatus::Completed {
            booking.price_cents
        } else {
            0
        };
        report.revenue_cents += revenue;

        let name = names
            .get(&booking.service_id)
            .copied()
            .unwrap_or("Unknown service");
        let summary = report
            .by_service
            .entry(booking.service_id)
            .or_insert_with(|| ServiceSummary {
                service_id: booking.service_id,
                service_name: name.to_string(),
                ..ServiceSummary::default()
            });
        summary.bookings += 1;
        summary.booked_minutes += booking.duration_minutes();
        summary.revenue_cents += revenue;

        if let Some(room) = &booking.room_number {
            *report.by_room.entry(room.clone()).or_default() += 1;
        }

        if config.is_peak_hour(booking.start_time.hour()) {
            report.peak_hour_bookings += 1;
        }
    }

    report
}
