//! Catch Simulation
//!
//! A catch succeeds with probability `1 - base_experience / 500`, floored at 10%.

use rand::{Rng, RngCore};

/// Base experience at which the raw chance reaches zero
pub const EXPERIENCE_CEILING: f64 = 500.0;

/// Lowest chance any Pokemon can be caught with
pub const MIN_CATCH_CHANCE: f64 = 0.1;

/// Returns the probability in `[MIN_CATCH_CHANCE, 1.0]` of catching a
/// Pokemon with the given base experience.
pub fn catch_chance(base_experience: u32) -> f64 {
    (1.0 - f64::from(base_experience) / EXPERIENCE_CEILING).max(MIN_CATCH_CHANCE)
}

/// Rolls once against [`catch_chance`]. Returns true on a catch.
pub fn attempt_catch(base_experience: u32, rng: &mut dyn RngCore) -> bool {
    rng.gen::<f64>() < catch_chance(base_experience)
}
