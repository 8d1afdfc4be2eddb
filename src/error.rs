use thiserror::Error;

use crate::model::{AccountId, EventId, ReservationId};

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Storage decode error: {0}")]
    Codec(#[from] bincode::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Ticket type not found: {0}")]
    TicketNotFound(String),

    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(ReservationId),

    #[error("Discount not found: {0}")]
    DiscountNotFound(String),

    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account {0} is not a customer")]
    NotACustomer(AccountId),

    #[error("Admin access required")]
    PermissionDenied,

    #[error("No sales data available")]
    NoSalesData,
}

pub type Result<T> = std::result::Result<T, Error>;
