//! Evasion rolls.

use crate::env::RngOracle;

/// Check if an attack is dodged.
///
/// `evasion_chance` is usually [`CombatRules::evasion_chance`] for the
/// defender's current buffs: 0.05 normally, 0.5 with an evasion buff.
///
/// [`CombatRules::evasion_chance`]: crate::config::CombatRules::evasion_chance
pub fn check_evasion(evasion_chance: f64, rng: &mut (impl RngOracle + ?Sized)) -> bool {
    rng.chance(evasion_chance)
}
