//! Command implementations for the CLI
//!
//! - table: Print projections for the configured scenarios
//! - estimate: Print a detailed estimate for one user/bet volume
//! - config: Configuration display and validation

pub mod config;
pub mod estimate;
pub mod table;
