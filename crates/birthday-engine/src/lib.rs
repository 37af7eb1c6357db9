//! # birthday-engine: exact state-space simulation.
//!
//! All probabilities are exact rationals for determinism over hundreds of
//! iterations.
//!
//! - **Transition**: each state fans out into one successor per non-empty
//!   bucket, except the last bucket, whose mass is absorbed.
//! - **Compaction**: successors with equal histograms are merged by summing
//!   their masses, keeping the state space polynomial in the room size.
//! - **Driver**: [`Simulation`] threads the population and the absorbed total
//!   through a forward-only loop and yields one [`StepReport`] per admission.

pub mod compaction;
pub mod report;
pub mod simulation;
pub mod transition;

pub use compaction::compact;
pub use report::{ReportRecord, StepReport, Summary};
pub use simulation::Simulation;
pub use transition::{advance, advance_all};
