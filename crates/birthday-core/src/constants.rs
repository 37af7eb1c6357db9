//! Simulation constants.

/// Number of equally likely birthdays. Leap years are not modelled.
pub const DAYS_IN_YEAR: u16 = 365;

/// Smallest meaningful collision multiplicity: two people sharing a day.
pub const MIN_TARGET: u8 = 2;

/// Largest supported collision multiplicity.
///
/// Histograms are sized exactly by the configured target, so this is only a
/// sanity bound on configuration, not a storage size.
pub const MAX_TARGET: u8 = 16;

/// Default collision multiplicity: some day shared by at least three people.
pub const DEFAULT_TARGET: u8 = 3;

/// Default number of people admitted to the room, one per iteration.
pub const DEFAULT_ITERATIONS: u32 = 400;

/// Number of people after which a collision of multiplicity `target` is certain.
///
/// With `365 * (target - 1)` people every day can hold at most `target - 1`
/// people; one more person forces a collision.
///
/// # Examples
///
/// ```
/// use birthday_core::constants::certain_collision_at;
/// assert_eq!(certain_collision_at(2), 366);
/// assert_eq!(certain_collision_at(3), 731);
/// ```
pub fn certain_collision_at(target: u8) -> u32 {
    u32::from(DAYS_IN_YEAR) * u32::from(target.saturating_sub(1)) + 1
}
