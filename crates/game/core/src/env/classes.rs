use crate::personality::PersonalityType;

/// Oracle mapping personality codes to playable classes.
///
/// Tables may cover only some of the 16 codes; the resolver substitutes the
/// configured fallback for codes without an entry.
pub trait ClassOracle: Send + Sync {
    fn class(&self, code: PersonalityType) -> Option<&ClassInfo>;
}

/// Static template for a playable character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassInfo {
    pub name: String,
    pub base_hp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub base_mp: u32,
    pub skills: Vec<Skill>,
    /// Described on the result screen; not mechanically enforced.
    #[cfg_attr(feature = "serde", serde(default))]
    pub passive: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl ClassInfo {
    pub fn new(name: impl Into<String>, base_hp: u32) -> Self {
        Self {
            name: name.into(),
            base_hp,
            base_mp: 0,
            skills: Vec::new(),
            passive: None,
            description: String::new(),
        }
    }

    pub fn with_base_mp(mut self, base_mp: u32) -> Self {
        self.base_mp = base_mp;
        self
    }

    pub fn with_skill(mut self, skill: Skill) -> Self {
        self.skills.push(skill);
        self
    }

    pub fn skill(&self, index: usize) -> Option<&Skill> {
        self.skills.get(index)
    }
}

/// A class ability.
///
/// The sign of `damage` decides what it does: positive hits the enemy,
/// negative heals the player by the absolute value, zero applies `effect`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub name: String,
    pub damage: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub mp_cost: u32,
    /// Enemy turns that must pass before the skill can be used again.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooldown: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: SkillKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub area_of_effect: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: Option<SkillEffect>,
}

impl Skill {
    pub fn new(name: impl Into<String>, damage: i32) -> Self {
        Self {
            name: name.into(),
            damage,
            description: String::new(),
            mp_cost: 0,
            cooldown: 0,
            kind: if damage < 0 {
                SkillKind::Healing
            } else {
                SkillKind::Physical
            },
            area_of_effect: false,
            effect: None,
        }
    }

    pub fn with_mp_cost(mut self, mp_cost: u32) -> Self {
        self.mp_cost = mp_cost;
        self
    }

    pub fn with_cooldown(mut self, cooldown: u32) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn with_effect(mut self, effect: SkillEffect) -> Self {
        self.kind = SkillKind::Buff;
        self.effect = Some(effect);
        self
    }

    pub fn is_healing(&self) -> bool {
        self.damage < 0
    }

    /// Healing magnitude for negative-damage skills, zero otherwise.
    pub fn heal_amount(&self) -> u32 {
        if self.damage < 0 {
            self.damage.unsigned_abs()
        } else {
            0
        }
    }

    /// Damage for offensive skills, zero otherwise.
    pub fn attack_damage(&self) -> u32 {
        self.damage.max(0) as u32
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SkillKind {
    #[default]
    Physical,
    Magical,
    Healing,
    Buff,
    Debuff,
}

/// Buff granted by a zero-damage skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillEffect {
    /// Incoming enemy damage is reduced for the given number of enemy turns.
    Guard { turns: u32 },
    /// Evasion chance is boosted for the given number of enemy turns.
    Evasion { turns: u32 },
    /// The next damaging action is multiplied.
    Empower,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_sign_discriminates_heal_and_attack() {
        let heal = Skill::new("Heal", -25);
        assert!(heal.is_healing());
        assert_eq!(heal.heal_amount(), 25);
        assert_eq!(heal.attack_damage(), 0);
        assert_eq!(heal.kind, SkillKind::Healing);

        let strike = Skill::new("Shield Bash", 18);
        assert!(!strike.is_healing());
        assert_eq!(strike.heal_amount(), 0);
        assert_eq!(strike.attack_damage(), 18);
    }
}
