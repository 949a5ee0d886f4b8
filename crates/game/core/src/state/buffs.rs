use bitflags::bitflags;

use crate::env::SkillEffect;

bitflags! {
    /// Player buffs currently in effect.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct PlayerBuffs: u8 {
        /// Next damaging action is multiplied.
        const ATTACK_BOOST = 1 << 0;
        /// Incoming damage is reduced.
        const GUARD = 1 << 1;
        /// Evasion chance is boosted.
        const EVASION = 1 << 2;
    }
}

/// Active buffs plus the enemy turns left on the timed ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Buffs {
    pub active: PlayerBuffs,
    pub guard_turns: u32,
    pub evasion_turns: u32,
}

impl Buffs {
    pub fn contains(&self, buff: PlayerBuffs) -> bool {
        self.active.contains(buff)
    }

    /// Applies a skill effect. Timed buffs keep the longer of the two durations.
    pub fn grant(&mut self, effect: SkillEffect) {
        match effect {
            SkillEffect::Guard { turns } if turns > 0 => {
                self.active.insert(PlayerBuffs::GUARD);
                self.guard_turns = self.guard_turns.max(turns);
            }
            SkillEffect::Evasion { turns } if turns > 0 => {
                self.active.insert(PlayerBuffs::EVASION);
                self.evasion_turns = self.evasion_turns.max(turns);
            }
            SkillEffect::Empower => self.active.insert(PlayerBuffs::ATTACK_BOOST),
            SkillEffect::Guard { .. } | SkillEffect::Evasion { .. } => {}
        }
    }

    /// Removes the attack boost, returning whether it was active.
    pub fn consume_attack_boost(&mut self) -> bool {
        let boosted = self.active.contains(PlayerBuffs::ATTACK_BOOST);
        self.active.remove(PlayerBuffs::ATTACK_BOOST);
        boosted
    }

    /// Counts timed buffs down by one enemy turn.
    pub fn tick(&mut self) {
        self.guard_turns = self.guard_turns.saturating_sub(1);
        self.evasion_turns = self.evasion_turns.saturating_sub(1);
        if self.guard_turns == 0 {
            self.active.remove(PlayerBuffs::GUARD);
        }
        if self.evasion_turns == 0 {
            self.active.remove(PlayerBuffs::EVASION);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timed_buffs_expire() {
        let mut buffs = Buffs::default();
        buffs.grant(SkillEffect::Guard { turns: 2 });
        buffs.grant(SkillEffect::Evasion { turns: 1 });
        assert!(buffs.contains(PlayerBuffs::GUARD | PlayerBuffs::EVASION));

        buffs.tick();
        assert!(buffs.contains(PlayerBuffs::GUARD));
        assert!(!buffs.contains(PlayerBuffs::EVASION));

        buffs.tick();
        assert!(buffs.active.is_empty());
    }

    #[test]
    fn attack_boost_is_single_use() {
        let mut buffs = Buffs::default();
        buffs.grant(SkillEffect::Empower);
        assert!(buffs.consume_attack_boost());
        assert!(!buffs.consume_attack_boost());
    }
}
