//! Error types for the birthday simulation.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("target must be at least 2, got {target}")] TargetTooSmall { target: u8 },
    #[error("target {target} exceeds supported maximum {max}")] TargetTooLarge { target: u8, max: u8 },
    #[error("iterations must be at least 1")] ZeroIterations,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistogramError {
    #[error("wrong histogram length: expected {expected}, got {got}")] WrongLength { expected: usize, got: usize },
    #[error("histogram counts sum to {got}, expected {expected}")] WrongTotal { expected: u32, got: u32 },
}

#[derive(Error, Debug)]
pub enum BirthdayError {
    #[error(transparent)] Config(#[from] ConfigError),
    #[error(transparent)] Histogram(#[from] HistogramError),
}
