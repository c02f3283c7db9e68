use thiserror::Error;

use crate::models::booking::BookingStatus;

#[derive(Error, Debug)]
pub enum SpaError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Slot unavailable: {0}")]
    SlotUnavailable(String),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] eyre::Report),
}

pub type SpaResult<T> = Result<T, SpaError>;
