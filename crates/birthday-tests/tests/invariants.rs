//! Population invariants, checked after every admission.
//!
//! - Mass conservation: tracked mass plus absorbed mass is exactly 1.
//! - Every histogram covers 365 days and accounts for everyone admitted.
//! - Compaction leaves each histogram at most once.
//! - The absorbed total never decreases.

use birthday_core::config::{SimulationConfig, StopRule};
use birthday_core::constants::{certain_collision_at, DAYS_IN_YEAR};
use birthday_core::types::{ratio, Histogram, Probability, State};
use birthday_engine::{compact, Simulation};
use birthday_tests::helpers::simulation;
use num_traits::{One, Zero};
use proptest::prelude::*;

fn check_invariants(sim: &mut Simulation) {
    let mut last = Probability::zero();
    while let Some(report) = sim.step() {
        let pop = sim.population();

        assert_eq!(pop.total_mass() + sim.absorbed(), Probability::one());
        assert!(pop.is_compacted());
        assert_eq!(report.states, pop.len());
        for state in pop {
            assert_eq!(state.histogram.total_days(), u32::from(DAYS_IN_YEAR));
            assert_eq!(state.histogram.occupants(), report.people);
            assert!(state.mass > Probability::zero());
        }

        assert!(report.cumulative >= last);
        assert_eq!(&report.cumulative - &last, report.incremental);
        last = report.cumulative;
    }
}

#[test]
fn invariants_hold_for_pairs() {
    check_invariants(&mut simulation(2, 80));
}

#[test]
fn invariants_hold_for_triples() {
    check_invariants(&mut simulation(3, 60));
}

#[test]
fn invariants_hold_for_quads() {
    check_invariants(&mut simulation(4, 30));
}

#[test]
fn first_admission_never_absorbs() {
    for target in 2u8..=6 {
        let mut sim = simulation(target, 1);
        let report = sim.step().unwrap();
        assert!(report.cumulative.is_zero());
        assert_eq!(sim.population().len(), 1);
    }
}

#[test]
fn empty_room_transition_example() {
    let mut sim = simulation(3, 1);
    sim.step();
    let h = Histogram::from_counts(3, &[364, 1, 0]).unwrap();
    assert_eq!(sim.population().mass_of(&h), Some(&Probability::one()));
    assert!(sim.absorbed().is_zero());
}

#[test]
fn independent_duplicates_compact_to_sum() {
    let a = State::new(Histogram::from_counts(3, &[362, 1, 2]).unwrap(), ratio(2, 9));
    let b = State::new(Histogram::from_counts(3, &[362, 1, 2]).unwrap(), ratio(1, 6));
    let pop = compact(vec![a, b]);
    assert_eq!(pop.len(), 1);
    assert_eq!(pop.states()[0].histogram.counts(), &[362, 1, 2]);
    assert_eq!(pop.states()[0].mass, ratio(7, 18));
}

#[test]
fn state_count_stays_polynomial() {
    // For target 3 the reachable histograms at k people satisfy
    // c1 + 2*c2 = k, so there are at most k/2 + 1 of them.
    let mut sim = simulation(3, 120);
    while let Some(report) = sim.step() {
        assert!(report.states <= report.people as usize / 2 + 1);
    }
}

#[test]
fn exhausted_rule_ends_at_pigeonhole_bound() {
    let cfg = SimulationConfig::new(2, 1000)
        .unwrap()
        .with_stop_rule(StopRule::Exhausted);
    let mut sim = Simulation::new(cfg).unwrap();
    let summary = sim.run_to_end();
    assert_eq!(summary.steps, certain_collision_at(2));
    assert_eq!(summary.final_cumulative, Probability::one());
    assert_eq!(summary.first_even_odds, Some(23));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn mass_conserved_for_any_target(target in 2u8..=6, iterations in 1u32..25) {
        let mut sim = simulation(target, iterations);
        let summary = sim.run_to_end();
        prop_assert_eq!(summary.steps, iterations);
        prop_assert_eq!(sim.population().total_mass() + sim.absorbed(), Probability::one());
        prop_assert!(sim.population().is_compacted());
    }
}
