// Module declarations
pub mod avatar;
pub mod clock;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod grouping;
pub mod interactive;
pub mod logging;
pub mod models;
pub mod schedule;
pub mod store;

// Re-export commonly used items
pub use clock::{FixedClock, SystemClock, ZoneClock};
pub use error::{DashboardError, DashboardResult};
pub use models::*;
pub use store::TeamStore;
