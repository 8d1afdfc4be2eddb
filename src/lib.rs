pub mod config;
pub mod error;
pub mod model;
pub mod registry;
pub mod report;
pub mod service;
pub mod store;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use registry::TicketRegistry;
pub use service::Ticketing;
pub use store::{Collection, CollectionKind, Store};
