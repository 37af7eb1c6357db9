//! Shared helpers: closed-form reference probabilities and run shortcuts.

use birthday_core::config::SimulationConfig;
use birthday_core::constants::DAYS_IN_YEAR;
use birthday_core::types::Probability;
use birthday_engine::{Simulation, StepReport};
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

/// `n!` as a big integer.
pub fn factorial(n: u32) -> BigInt {
    (1..=n).fold(BigInt::one(), |acc, i| acc * BigInt::from(i))
}

/// `365^k` as a big integer.
fn year_pow(k: u32) -> BigInt {
    num_traits::pow(BigInt::from(DAYS_IN_YEAR), k as usize)
}

/// Classical birthday problem: `1 - (365! / (365 - k)!) / 365^k`.
pub fn pair_probability(k: u32) -> Probability {
    let days = u32::from(DAYS_IN_YEAR);
    if k > days {
        return Probability::one();
    }
    let falling = factorial(days) / factorial(days - k);
    Probability::one() - BigRational::new(falling, year_pow(k))
}

/// Probability that `k` people include some day shared by three or more.
///
/// Counts assignments where `j` days hold two people and `k - 2j` days hold
/// one: `365! k! / (j! (k-2j)! (365-k+j)! 2^j)`, summed over `j`.
pub fn triple_probability(k: u32) -> Probability {
    let days = u32::from(DAYS_IN_YEAR);
    let mut favourable = BigInt::zero();
    for j in 0..=k / 2 {
        let singles = k - 2 * j;
        let used = j + singles;
        if used > days {
            continue;
        }
        let ways = factorial(days) * factorial(k)
            / (factorial(j)
                * factorial(singles)
                * factorial(days - used)
                * num_traits::pow(BigInt::from(2), j as usize));
        favourable += ways;
    }
    Probability::one() - BigRational::new(favourable, year_pow(k))
}

/// Build a fixed-length simulation.
pub fn simulation(target: u8, iterations: u32) -> Simulation {
    let config = SimulationConfig::new(target, iterations).expect("valid test config");
    Simulation::new(config).expect("valid test config")
}

/// Collect every report of a fixed-length run.
pub fn reports(target: u8, iterations: u32) -> Vec<StepReport> {
    simulation(target, iterations).collect()
}
