pub mod calculator;
pub mod models;
pub mod schedule;

pub use calculator::{CostCalculator, DEFAULT_PARTICIPATION_RATE};
pub use models::CostEstimate;
pub use schedule::ScheduledJob;
