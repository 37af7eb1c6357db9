//! # birthday-core
//! Foundation types for the generalized birthday-paradox simulation.
//!
//! All probabilities are exact rationals; floating point only appears when a
//! value is formatted for display.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

pub use config::{SimulationConfig, StopRule};
pub use error::{BirthdayError, ConfigError, HistogramError};
pub use types::{Histogram, Population, Probability, State};
