use chrono::NaiveDate;
use hotelops_core::{
    errors::SpaResult,
    reports::{build_daily_report, DailySpaReport},
};

use crate::DeskState;

/// Daily spa report over the stored bookings and the current catalog.
pub async fn daily_report(state: &DeskState, day: NaiveDate) -> SpaResult<DailySpaReport> {
    let bookings = state.bookings.get_bookings_for_day(day).await?;
    let services = state.services.list_services().await?;

    Ok(build_daily_report(day, &bookings, &services, &state.availability))
}
