pub mod account;
pub mod discount;
pub mod event;
pub mod reservation;
pub mod sales;
pub mod ticket;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub use account::{Account, Role};
pub use discount::Discount;
pub use event::Event;
pub use reservation::{Reservation, ReservationStatus};
pub use sales::SalesLog;
pub use ticket::{TicketDefinition, TicketKind};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_id!(
    /// Identifier of a customer or admin account.
    AccountId
);
define_id!(
    /// Identifier of a ticket definition. Regenerated every run since the
    /// catalog is never persisted.
    TicketId
);
define_id!(
    /// Identifier of a race event.
    EventId
);
define_id!(
    /// Identifier of a reservation.
    ReservationId
);

/// Rounds a monetary amount to two decimal places.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
