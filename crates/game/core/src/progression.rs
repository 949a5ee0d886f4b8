//! Experience and leveling.
//!
//! ```text
//! level                 = floor(sqrt(experience / 10)) + 1
//! experience_for_next   = level² × 10
//! ```
//!
//! Both are monotonic and agree with each other: reaching
//! `experience_for_next_level(l)` puts the player exactly at level `l + 1`.

const EXPERIENCE_SCALE: u32 = 10;

/// Level for a total amount of experience. Level 1 at zero experience.
pub fn calculate_level(experience: u32) -> u32 {
    (experience / EXPERIENCE_SCALE).isqrt() + 1
}

/// Total experience needed to leave `level`.
pub fn experience_for_next_level(level: u32) -> u32 {
    level
        .saturating_mul(level)
        .saturating_mul(EXPERIENCE_SCALE)
}
