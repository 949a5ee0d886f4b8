//! RNG oracle for injectable random number generation.
//!
//! The rules never call a global random source. Every roll (enemy selection,
//! critical hits, evasion) draws from an [`RngOracle`] passed in by the
//! caller, so tests can supply fixed sequences and sessions can be replayed
//! from a seed.
//!
//! # Roll order
//!
//! - `StartBattle`: one draw to pick the enemy
//! - damaging player action: one draw for the critical roll
//! - `EnemyTurn`: one draw for evasion, then one for the critical roll if the
//!   attack was not evaded

/// Source of uniform floats in `[0, 1)`.
pub trait RngOracle {
    /// Returns the next value in `[0, 1)`.
    fn next_float(&mut self) -> f64;

    /// Bernoulli draw: true when the next value is below `probability`.
    fn chance(&mut self, probability: f64) -> bool {
        self.next_float() < probability
    }

    /// Uniform index in `0..len`. Always consumes one draw.
    fn pick_index(&mut self, len: usize) -> usize {
        let roll = self.next_float();
        if len <= 1 {
            return 0;
        }
        ((roll * len as f64) as usize).min(len - 1)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Same seed, same sequence.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed ^ 0x9e3779b97f4a7c15),
        }
    }

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// Output permutation (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

impl RngOracle for PcgRng {
    fn next_float(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Values outside `[0, 1)` are clamped into range.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceRng {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// A source that returns the same value forever.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RngOracle for SequenceRng {
    fn next_float(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
