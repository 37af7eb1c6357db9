//! Per-iteration reports.
//!
//! [`StepReport`] carries exact values; [`ReportRecord`] is the flattened,
//! serializable form with floating-point approximations for display.

use birthday_core::types::{ratio, Probability};
use num_traits::ToPrimitive;
use serde::Serialize;

/// Outcome of admitting one more person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// People in the room after this step.
    pub people: u32,
    /// Probability that some day is shared by `target` people by now.
    pub cumulative: Probability,
    /// Probability that this step's admission caused the first such collision.
    pub incremental: Probability,
    /// Tracked states after compaction.
    pub states: usize,
}

impl StepReport {
    pub fn cumulative_f64(&self) -> f64 {
        to_f64(&self.cumulative)
    }

    pub fn incremental_f64(&self) -> f64 {
        to_f64(&self.incremental)
    }

    /// Flatten for output; exact `n/d` strings are included only on request.
    pub fn to_record(&self, exact: bool) -> ReportRecord {
        ReportRecord {
            people: self.people,
            cumulative_probability: self.cumulative_f64(),
            incremental_probability: self.incremental_f64(),
            states: self.states,
            cumulative_exact: exact.then(|| self.cumulative.to_string()),
            incremental_exact: exact.then(|| self.incremental.to_string()),
        }
    }
}

/// Serializable report line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRecord {
    pub people: u32,
    pub cumulative_probability: f64,
    pub incremental_probability: f64,
    pub states: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cumulative_exact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incremental_exact: Option<String>,
}

/// Aggregate facts about a finished run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    /// Steps actually performed.
    pub steps: u32,
    /// Smallest room size at which the cumulative probability reached 1/2.
    pub first_even_odds: Option<u32>,
    /// Cumulative probability after the last step.
    pub final_cumulative: Probability,
    /// Largest compacted population seen.
    pub peak_states: usize,
}

impl Summary {
    /// Fold one report into the summary.
    pub fn observe(&mut self, report: &StepReport) {
        self.steps = report.people;
        self.peak_states = self.peak_states.max(report.states);
        if self.first_even_odds.is_none() && report.cumulative >= ratio(1, 2) {
            self.first_even_odds = Some(report.people);
        }
        self.final_cumulative = report.cumulative.clone();
    }
}

/// Display-only conversion. Probabilities are in `[0, 1]`, so this never
/// falls back in practice.
fn to_f64(p: &Probability) -> f64 {
    p.to_f64().unwrap_or(f64::NAN)
}
