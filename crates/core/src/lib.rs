//! # hotelops core
//!
//! Domain types and pure logic for the hotel spa desk: services, bookings,
//! availability configuration, the slot computer and the daily report.

pub mod availability;
pub mod config;
pub mod errors;
pub mod models;
pub mod reports;
