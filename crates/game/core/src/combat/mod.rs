//! Combat resolution system.
//!
//! This module provides pure functions for resolving combat interactions.
//! Randomness is drawn from an injected [`RngOracle`](crate::env::RngOracle);
//! given the same draws, every function returns the same result.
//!
//! # Core Functions
//!
//! - `calculate_damage`: critical roll, defense reduction, minimum of 1
//! - `check_evasion`: Bernoulli dodge roll
//! - `apply_damage`: HP reduction (clamped to 0)
//! - `heal`: HP recovery (clamped to the maximum)

pub mod damage;
pub mod evasion;
pub mod result;

pub use damage::{
    apply_damage, boosted_damage, calculate_damage, calculate_damage_with, guarded_damage, heal,
};
pub use evasion::check_evasion;
pub use result::DamageRoll;
