//! Simulation configuration.
//!
//! Provides [`SimulationConfig`] with defaults matching the classic
//! three-way run (target 3, 400 people). The configuration is validated
//! once, before the driver builds its initial population.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ITERATIONS, DEFAULT_TARGET, MAX_TARGET, MIN_TARGET};
use crate::error::ConfigError;

/// When the driver loop stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopRule {
    /// Always run exactly `iterations` admissions.
    #[default]
    Fixed,
    /// Run at most `iterations` admissions, stopping early once no tracked
    /// state remains (the absorbed probability is then exactly 1).
    Exhausted,
}

/// Parameters of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Collision multiplicity threshold. Must be in `MIN_TARGET..=MAX_TARGET`.
    pub target: u8,
    /// Number of people admitted, one per iteration. Must be at least 1.
    pub iterations: u32,
    /// Termination rule.
    pub stop_rule: StopRule,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            iterations: DEFAULT_ITERATIONS,
            stop_rule: StopRule::Fixed,
        }
    }
}

impl SimulationConfig {
    /// Build and validate a fixed-length configuration.
    pub fn new(target: u8, iterations: u32) -> Result<Self, ConfigError> {
        let config = Self {
            target,
            iterations,
            stop_rule: StopRule::Fixed,
        };
        config.validate()?;
        Ok(config)
    }

    /// Same configuration with a different stop rule.
    pub fn with_stop_rule(self, stop_rule: StopRule) -> Self {
        Self { stop_rule, ..self }
    }

    /// Check the parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target < MIN_TARGET {
            return Err(ConfigError::TargetTooSmall {
                target: self.target,
            });
        }
        if self.target > MAX_TARGET {
            return Err(ConfigError::TargetTooLarge {
                target: self.target,
                max: MAX_TARGET,
            });
        }
        if self.iterations == 0 {
            return Err(ConfigError::ZeroIterations);
        }
        Ok(())
    }

    /// Histogram length for this target: buckets for 0 through `target - 1` sharers.
    pub fn histogram_len(&self) -> usize {
        usize::from(self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let cfg = SimulationConfig::default();
        assert_eq!(cfg.target, 3);
        assert_eq!(cfg.iterations, 400);
        assert_eq!(cfg.stop_rule, StopRule::Fixed);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn target_below_two_rejected() {
        assert_eq!(
            SimulationConfig::new(1, 10),
            Err(ConfigError::TargetTooSmall { target: 1 })
        );
        assert_eq!(
            SimulationConfig::new(0, 10),
            Err(ConfigError::TargetTooSmall { target: 0 })
        );
    }

    #[test]
    fn target_above_max_rejected() {
        assert_eq!(
            SimulationConfig::new(MAX_TARGET + 1, 10),
            Err(ConfigError::TargetTooLarge {
                target: MAX_TARGET + 1,
                max: MAX_TARGET
            })
        );
    }

    #[test]
    fn zero_iterations_rejected() {
        assert_eq!(
            SimulationConfig::new(2, 0),
            Err(ConfigError::ZeroIterations)
        );
    }

    #[test]
    fn with_stop_rule_keeps_other_fields() {
        let cfg = SimulationConfig::new(4, 12)
            .unwrap()
            .with_stop_rule(StopRule::Exhausted);
        assert_eq!(cfg.target, 4);
        assert_eq!(cfg.iterations, 12);
        assert_eq!(cfg.stop_rule, StopRule::Exhausted);
    }

    #[test]
    fn histogram_len_matches_target() {
        let cfg = SimulationConfig::new(5, 1).unwrap();
        assert_eq!(cfg.histogram_len(), 5);
    }

    #[test]
    fn config_is_clone_and_debug() {
        let cfg = SimulationConfig::default().with_stop_rule(StopRule::Exhausted);
        let debug = format!("{:?}", cfg.clone());
        assert!(debug.contains("SimulationConfig"));
        assert!(debug.contains("Exhausted"));
    }
}
