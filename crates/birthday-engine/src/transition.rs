//! Transition engine: admit one person to the room.
//!
//! A new person's birthday lands on a day currently shared by `i` people with
//! probability `counts[i] / 365`. Landing on a day in the last tracked bucket
//! (`i == target - 1`) completes a collision, so that branch's mass leaves the
//! population and is added to the absorbed total instead.

use birthday_core::constants::DAYS_IN_YEAR;
use birthday_core::types::{ratio, Probability, State};

/// Expand `state` by one admission.
///
/// Successor states are appended to `out`; absorbed mass is added to
/// `absorbed`. Empty buckets are skipped so no zero-mass state is emitted.
/// The masses appended plus the mass absorbed sum to `state.mass` exactly.
pub fn advance(state: &State, out: &mut Vec<State>, absorbed: &mut Probability) {
    let counts = state.histogram.counts();
    let last = counts.len().saturating_sub(1);

    for (bucket, &count) in counts.iter().enumerate() {
        if count == 0 {
            continue;
        }

        let mass = &state.mass * ratio(u32::from(count), u32::from(DAYS_IN_YEAR));

        if bucket < last {
            if let Some(histogram) = state.histogram.promote(bucket) {
                out.push(State::new(histogram, mass));
            }
        } else {
            *absorbed += mass;
        }
    }
}

/// Expand every state of a population, returning the uncompacted successors.
///
/// The output is pre-sized to `len * (target - 1)`, the worst-case fan-out.
pub fn advance_all<'a, I>(states: I, target: u8, absorbed: &mut Probability) -> Vec<State>
where
    I: ExactSizeIterator<Item = &'a State>,
{
    let fan_out = usize::from(target.saturating_sub(1));
    let mut out = Vec::with_capacity(states.len() * fan_out);
    for state in states {
        advance(state, &mut out, absorbed);
    }
    out
}
