//! State-space compaction.
//!
//! Many room histories collapse onto the same histogram. Sorting by the
//! histogram order makes equal histograms adjacent; one linear pass then folds
//! each run into a single state carrying the summed mass. Without this the
//! state list grows exponentially with the number of people admitted.

use birthday_core::types::{Population, State};
use tracing::trace;

/// Sort `states` and merge runs of equal histograms, summing their masses.
pub fn compact(mut states: Vec<State>) -> Population {
    let before = states.len();
    states.sort_unstable_by(|a, b| a.histogram.cmp(&b.histogram));

    // `dedup_by` hands us (later, kept); fold the later mass into the kept one.
    states.dedup_by(|later, kept| {
        if later.histogram == kept.histogram {
            kept.mass += &later.mass;
            true
        } else {
            false
        }
    });

    trace!(before, after = states.len(), "compacted successor states");
    Population::from_compacted(states)
}
