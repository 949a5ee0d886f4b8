use crate::env::Tier;
use crate::personality::PersonalityType;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Balance parameters used by the damage engine.
    pub combat: CombatRules,

    /// Battle counts at which stronger enemy tiers unlock.
    pub tiers: TierThresholds,

    /// Personality type substituted when the resolved code has no class.
    pub fallback_type: PersonalityType,

    /// Pause between the player's action and the enemy's counter-attack.
    /// Only the runtime scheduler reads this; the rules never wait.
    pub enemy_turn_delay_ms: u64,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_ENEMY_TURN_DELAY_MS: u64 = 1000;
    pub const DEFAULT_FALLBACK_TYPE: PersonalityType = PersonalityType::INFP;

    pub fn new() -> Self {
        Self {
            combat: CombatRules::default(),
            tiers: TierThresholds::default(),
            fallback_type: Self::DEFAULT_FALLBACK_TYPE,
            enemy_turn_delay_ms: Self::DEFAULT_ENEMY_TURN_DELAY_MS,
        }
    }

    pub fn with_enemy_turn_delay_ms(mut self, delay_ms: u64) -> Self {
        self.enemy_turn_delay_ms = delay_ms;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Balance parameters for damage, critical hits and evasion.
///
/// Probabilities are in `[0, 1]`; a roll succeeds when the random source
/// returns a value strictly below the probability.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatRules {
    /// Critical chance for player attacks.
    pub crit_chance: f64,
    /// Critical chance for enemy attacks.
    pub enemy_crit_chance: f64,
    /// Damage multiplier applied on a critical hit (before defense).
    pub crit_multiplier: f64,
    /// Damage removed per point of defense.
    pub defense_reduction: f64,
    /// Multiplier applied to incoming damage while guarding.
    pub guard_multiplier: f64,
    /// Chance to dodge an enemy attack.
    pub evasion_chance: f64,
    /// Chance to dodge while an evasion buff is active.
    pub boosted_evasion_chance: f64,
    /// Multiplier applied to the next damaging action after an attack boost.
    pub attack_boost_multiplier: f64,
}

impl CombatRules {
    pub const CRITICAL_CHANCE: f64 = 0.15;
    pub const CRITICAL_MULTIPLIER: f64 = 1.5;
    pub const DEFENSE_REDUCTION: f64 = 0.3;
    pub const GUARD_MULTIPLIER: f64 = 0.5;
    pub const EVASION_BASE_CHANCE: f64 = 0.05;
    pub const EVASION_BOOSTED_CHANCE: f64 = 0.5;
    pub const ATTACK_BOOST_MULTIPLIER: f64 = 1.5;

    /// Evasion probability for the current buff state.
    pub fn evasion_chance(&self, evasion_active: bool) -> f64 {
        if evasion_active {
            self.boosted_evasion_chance
        } else {
            self.evasion_chance
        }
    }
}

impl Default for CombatRules {
    fn default() -> Self {
        Self {
            crit_chance: Self::CRITICAL_CHANCE,
            enemy_crit_chance: 0.0,
            crit_multiplier: Self::CRITICAL_MULTIPLIER,
            defense_reduction: Self::DEFENSE_REDUCTION,
            guard_multiplier: Self::GUARD_MULTIPLIER,
            evasion_chance: Self::EVASION_BASE_CHANCE,
            boosted_evasion_chance: Self::EVASION_BOOSTED_CHANCE,
            attack_boost_multiplier: Self::ATTACK_BOOST_MULTIPLIER,
        }
    }
}

/// Step function from the number of won battles to the enemy tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TierThresholds {
    /// First battle count that draws from the normal tier.
    pub normal: u32,
    /// First battle count that draws from the strong tier.
    pub strong: u32,
}

impl TierThresholds {
    pub const DEFAULT_NORMAL: u32 = 2;
    pub const DEFAULT_STRONG: u32 = 5;

    pub fn tier_for(&self, battle_count: u32) -> Tier {
        if battle_count >= self.strong {
            Tier::Strong
        } else if battle_count >= self.normal {
            Tier::Normal
        } else {
            Tier::Weak
        }
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            normal: Self::DEFAULT_NORMAL,
            strong: Self::DEFAULT_STRONG,
        }
    }
}
