pub mod availability;
pub mod booking;
pub mod report;
