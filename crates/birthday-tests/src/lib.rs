//! Integration test suite for the birthday simulation.
//!
//! Cross-checks the compacted state-space simulation against closed-form
//! combinatorial answers and verifies the population invariants end to end.

pub mod helpers;
