//! Damage calculation and application.

use crate::config::CombatRules;
use crate::env::RngOracle;

use super::result::DamageRoll;

/// Calculate damage from an attack using the default balance rules.
///
/// # Formula
///
/// ```text
/// damage = base_damage
/// if critical (roll < crit_chance):
///     damage *= crit_multiplier            (1.5)
/// damage -= defense * defense_reduction    (0.3)
/// final_damage = round(max(damage, 1))
/// ```
///
/// The critical multiplier is applied before the defense reduction.
pub fn calculate_damage(
    base_damage: u32,
    defense: u32,
    crit_chance: f64,
    rng: &mut (impl RngOracle + ?Sized),
) -> DamageRoll {
    calculate_damage_with(&CombatRules::default(), base_damage, defense, crit_chance, rng)
}

/// Same as [`calculate_damage`] with multipliers taken from `rules`.
///
/// Always consumes exactly one draw from `rng`.
pub fn calculate_damage_with(
    rules: &CombatRules,
    base_damage: u32,
    defense: u32,
    crit_chance: f64,
    rng: &mut (impl RngOracle + ?Sized),
) -> DamageRoll {
    let is_critical = rng.chance(crit_chance);

    let mut damage = f64::from(base_damage);
    if is_critical {
        damage *= rules.crit_multiplier;
    }

    damage -= f64::from(defense) * rules.defense_reduction;

    DamageRoll {
        damage: damage.max(1.0).round() as u32,
        is_critical,
    }
}

/// Reduces incoming damage while the defender is guarding.
pub fn guarded_damage(damage: u32, rules: &CombatRules) -> u32 {
    ((f64::from(damage) * rules.guard_multiplier).floor() as u32).max(1)
}

/// Applies an attack boost multiplier to base damage.
pub fn boosted_damage(damage: u32, rules: &CombatRules) -> u32 {
    (f64::from(damage) * rules.attack_boost_multiplier).floor() as u32
}

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Restore HP without exceeding `max_hp`.
///
/// Overheal is clamped, never rejected.
pub fn heal(current_hp: u32, amount: u32, max_hp: u32) -> u32 {
    current_hp.saturating_add(amount).min(max_hp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SequenceRng;

    #[test]
    fn no_defense_no_crit_returns_base_with_floor_of_one() {
        let mut rng = SequenceRng::constant(0.0);
        for base in [0, 1, 7, 18, 150] {
            let roll = calculate_damage(base, 0, 0.0, &mut rng);
            assert_eq!(roll, DamageRoll::normal(base.max(1)));
        }
    }

    #[test]
    fn guaranteed_crit_multiplies_before_defense() {
        let mut rng = SequenceRng::new([0.0, 0.5, 0.999]);
        for base in [1, 15, 22, 40] {
            let roll = calculate_damage(base, 0, 1.0, &mut rng);
            assert!(roll.is_critical);
            assert!(f64::from(roll.damage) >= f64::from(base) * CombatRules::CRITICAL_MULTIPLIER);
        }
    }

    #[test]
    fn critical_rounds_half_up() {
        let mut rng = SequenceRng::constant(0.0);
        // 15 * 1.5 = 22.5
        assert_eq!(calculate_damage(15, 0, 1.0, &mut rng).damage, 23);
    }

    #[test]
    fn defense_reduces_and_is_floored_at_one() {
        let mut rng = SequenceRng::constant(0.99);
        // 20 - 10 * 0.3 = 17
        assert_eq!(calculate_damage(20, 10, 0.15, &mut rng).damage, 17);
        // 2 - 100 * 0.3 < 1
        assert_eq!(calculate_damage(2, 100, 0.15, &mut rng).damage, 1);
    }

    #[test]
    fn custom_rules_change_the_multiplier() {
        let rules = CombatRules {
            crit_multiplier: 2.0,
            ..CombatRules::default()
        };
        let mut rng = SequenceRng::constant(0.0);
        let roll = calculate_damage_with(&rules, 10, 0, 1.0, &mut rng);
        assert_eq!(roll.damage, 20);
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn guard_halves_incoming_damage() {
        let rules = CombatRules::default();
        assert_eq!(guarded_damage(25, &rules), 12);
        assert_eq!(guarded_damage(1, &rules), 1);
    }

    #[test]
    fn hp_never_below_zero() {
        for hp in [0, 1, 50] {
            for amount in [0, 1, 49, 50, 51, u32::MAX] {
                let after = apply_damage(hp, amount);
                assert!(after <= hp);
                assert_eq!(after, hp.saturating_sub(amount));
            }
        }
    }

    #[test]
    fn heal_never_exceeds_max() {
        for hp in [0, 10, 90] {
            for amount in [0, 5, 80, 200, u32::MAX] {
                assert!(heal(hp, amount, 90) <= 90);
            }
        }
        assert_eq!(heal(60, 25, 90), 85);
        assert_eq!(heal(80, 25, 90), 90);
    }
}
