pub mod booking;
pub mod service;
