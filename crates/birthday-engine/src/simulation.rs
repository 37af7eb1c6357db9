//! Driver loop.
//!
//! [`Simulation`] owns the current population and the absorbed-probability
//! accumulator and advances both one admission per [`Iterator::next`] call:
//! expand every state, drop the old population, compact the successors, and
//! report the cumulative and incremental absorbed probability.

use birthday_core::config::{SimulationConfig, StopRule};
use birthday_core::error::ConfigError;
use birthday_core::types::{Population, Probability};
use num_traits::Zero;
use tracing::{debug, info, trace};

use crate::compaction::compact;
use crate::report::{StepReport, Summary};
use crate::transition::advance_all;

/// Exact simulation of people entering a room one at a time.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    population: Population,
    absorbed: Probability,
    people: u32,
}

impl Simulation {
    /// Validate `config` and build the empty-room population.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            collision_target = config.target,
            iterations = config.iterations,
            stop_rule = ?config.stop_rule,
            "starting simulation"
        );
        Ok(Self {
            population: Population::initial(config.target),
            absorbed: Probability::zero(),
            people: 0,
            config,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Probability that a collision has happened by now.
    pub fn absorbed(&self) -> &Probability {
        &self.absorbed
    }

    /// People admitted so far.
    pub fn people(&self) -> u32 {
        self.people
    }

    /// True once no further step will be taken.
    pub fn is_done(&self) -> bool {
        if self.people >= self.config.iterations {
            return true;
        }
        match self.config.stop_rule {
            StopRule::Fixed => false,
            StopRule::Exhausted => self.population.is_empty(),
        }
    }

    /// Admit one person. Returns `None` when the run is complete.
    pub fn step(&mut self) -> Option<StepReport> {
        if self.is_done() {
            return None;
        }

        let previous = self.absorbed.clone();
        let current = std::mem::take(&mut self.population);
        let successors = advance_all(current.iter(), self.config.target, &mut self.absorbed);
        drop(current);

        self.population = compact(successors);
        self.people += 1;

        if tracing::enabled!(tracing::Level::TRACE) {
            for state in &self.population {
                trace!(people = self.people, histogram = %state.histogram, mass = %state.mass);
            }
        }

        let report = StepReport {
            people: self.people,
            incremental: &self.absorbed - &previous,
            cumulative: self.absorbed.clone(),
            states: self.population.len(),
        };
        debug!(
            people = report.people,
            states = report.states,
            cumulative = report.cumulative_f64(),
            "admitted person"
        );
        Some(report)
    }

    /// Run the remaining steps, handing each report to `sink`.
    pub fn run_with<F>(&mut self, mut sink: F) -> Summary
    where
        F: FnMut(&StepReport),
    {
        let mut summary = Summary::default();
        while let Some(report) = self.step() {
            summary.observe(&report);
            sink(&report);
        }
        info!(
            steps = summary.steps,
            first_even_odds = ?summary.first_even_odds,
            peak_states = summary.peak_states,
            "simulation finished"
        );
        summary
    }

    /// Run the remaining steps, discarding per-step reports.
    pub fn run_to_end(&mut self) -> Summary {
        self.run_with(|_| {})
    }
}

impl Iterator for Simulation {
    type Item = StepReport;

    fn next(&mut self) -> Option<StepReport> {
        self.step()
    }
}
