//! Encounter actions: starting a battle, player skills and items, and the
//! enemy counter-attack.

use crate::combat::{
    apply_damage, boosted_damage, calculate_damage_with, check_evasion, guarded_damage, heal,
};
use crate::env::{GameEnv, ItemEffect, RngOracle, SkillEffect};
use crate::state::{BattleState, GameState, LogEntry, Phase, PlayerBuffs, Turn};

use super::{
    ActionTransition, BattleError, EncounterStart, EnemyOutcome, PlayerEffect, PlayerOutcome,
};

// ============================================================================
// Shared guards
// ============================================================================

fn active_battle(state: &GameState) -> Result<&BattleState, BattleError> {
    if state.phase != Phase::Battle {
        return Err(BattleError::WrongPhase { phase: state.phase });
    }
    state.battle.as_ref().ok_or(BattleError::NoBattle)
}

fn active_battle_mut(state: &mut GameState) -> Result<&mut BattleState, BattleError> {
    if state.phase != Phase::Battle {
        return Err(BattleError::WrongPhase { phase: state.phase });
    }
    state.battle.as_mut().ok_or(BattleError::NoBattle)
}

fn player_turn(state: &GameState) -> Result<&BattleState, BattleError> {
    let battle = active_battle(state)?;
    if !battle.is_player_turn() {
        return Err(BattleError::NotPlayerTurn);
    }
    Ok(battle)
}

fn check_resources(battle: &BattleState) -> Result<(), BattleError> {
    if battle.player_hp > battle.max_hp() || battle.player_mp > battle.max_mp() {
        return Err(BattleError::ResourcesOutOfBounds {
            hp: battle.player_hp,
            max_hp: battle.max_hp(),
            mp: battle.player_mp,
            max_mp: battle.max_mp(),
        });
    }
    Ok(())
}

/// Ends the player's action: victory if the enemy fell, otherwise the enemy
/// acts next.
fn finish_player_action(
    state: &mut GameState,
    effect: PlayerEffect,
) -> Result<PlayerOutcome, BattleError> {
    let (enemy_hp, defeated, enemy_name, reward) = {
        let battle = active_battle(state)?;
        (
            battle.enemy.hp,
            battle.enemy.is_defeated(),
            battle.enemy.name().to_string(),
            battle.enemy.template.exp_reward,
        )
    };

    if !defeated {
        active_battle_mut(state)?.turn = Turn::Enemy;
        return Ok(PlayerOutcome {
            effect,
            enemy_hp,
            victory: false,
            experience_gained: 0,
            level_up: None,
        });
    }

    let level_before = state.level();
    state.battle_count += 1;
    state.experience = state.experience.saturating_add(reward);
    let level_after = state.level();
    let level_up = (level_after > level_before).then_some(level_after);

    let battle = active_battle_mut(state)?;
    battle.log.push(LogEntry::EnemyDefeated {
        enemy: enemy_name,
        experience: reward,
    });
    if let Some(level) = level_up {
        battle.log.push(LogEntry::LevelUp { level });
    }
    state.phase = Phase::Victory;

    Ok(PlayerOutcome {
        effect,
        enemy_hp: 0,
        victory: true,
        experience_gained: reward,
        level_up,
    })
}

// ============================================================================
// StartBattle
// ============================================================================

/// Spawns the next enemy for the resolved class.
///
/// The tier follows the number of battles won; the template is drawn
/// uniformly from that tier, or from the whole roster when the tier is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartBattleAction;

impl ActionTransition for StartBattleAction {
    type Error = BattleError;
    type Result = EncounterStart;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if !matches!(state.phase, Phase::Result | Phase::Victory) {
            return Err(BattleError::WrongPhase { phase: state.phase });
        }
        let personality = state
            .personality
            .ok_or(BattleError::PersonalityUnresolved)?;
        if env.classes().class(personality).is_none() {
            return Err(BattleError::ClassNotFound { personality });
        }
        if env.enemies().roster().is_empty() {
            return Err(BattleError::EmptyRoster);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        rng: &mut dyn RngOracle,
    ) -> Result<Self::Result, Self::Error> {
        let personality = state
            .personality
            .ok_or(BattleError::PersonalityUnresolved)?;
        let class = env
            .classes()
            .class(personality)
            .ok_or(BattleError::ClassNotFound { personality })?;

        let tier = env.config().tiers.tier_for(state.battle_count);
        let mut pool = env.enemies().by_tier(tier);
        if pool.is_empty() {
            pool = env.enemies().roster().iter().collect();
        }
        let template = *pool
            .get(rng.pick_index(pool.len()))
            .ok_or(BattleError::EmptyRoster)?;

        state.encounter += 1;
        state.battle = Some(BattleState::new(
            personality,
            class,
            template,
            state.encounter,
        ));
        state.phase = Phase::Battle;

        Ok(EncounterStart {
            encounter: state.encounter,
            enemy: template.name.clone(),
            tier: template.tier,
        })
    }
}

// ============================================================================
// UseSkill
// ============================================================================

/// Uses a class skill by its index in the class skill list.
///
/// Negative skill damage heals, positive damage hits the enemy, zero grants
/// the skill's buff.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseSkillAction {
    pub skill: usize,
}

impl UseSkillAction {
    pub fn new(skill: usize) -> Self {
        Self { skill }
    }
}

impl ActionTransition for UseSkillAction {
    type Error = BattleError;
    type Result = PlayerOutcome;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let battle = player_turn(state)?;
        let skill = battle
            .class
            .skill(self.skill)
            .ok_or(BattleError::UnknownSkill { index: self.skill })?;

        let remaining = battle.cooldown(self.skill);
        if remaining > 0 {
            return Err(BattleError::OnCooldown {
                skill: skill.name.clone(),
                remaining,
            });
        }
        if battle.player_mp < skill.mp_cost {
            return Err(BattleError::InsufficientMp {
                required: skill.mp_cost,
                available: battle.player_mp,
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        rng: &mut dyn RngOracle,
    ) -> Result<Self::Result, Self::Error> {
        let rules = env.config().combat;
        let battle = active_battle_mut(state)?;
        let skill = battle
            .class
            .skill(self.skill)
            .cloned()
            .ok_or(BattleError::UnknownSkill { index: self.skill })?;

        battle.player_mp = battle.player_mp.saturating_sub(skill.mp_cost);
        if let Some(remaining) = battle.cooldowns.get_mut(self.skill) {
            *remaining = skill.cooldown;
        }

        let effect = if skill.is_healing() {
            let before = battle.player_hp;
            battle.player_hp = heal(before, skill.heal_amount(), battle.max_hp());
            let amount = battle.player_hp - before;
            battle.log.push(LogEntry::SkillHeal {
                skill: skill.name.clone(),
                amount,
            });
            PlayerEffect::Heal { amount }
        } else if skill.attack_damage() > 0 {
            let mut base = skill.attack_damage();
            if battle.buffs.consume_attack_boost() {
                base = boosted_damage(base, &rules);
            }
            let roll = calculate_damage_with(&rules, base, 0, rules.crit_chance, rng);
            battle.enemy.hp = apply_damage(battle.enemy.hp, roll.damage);
            battle.log.push(LogEntry::SkillHit {
                skill: skill.name.clone(),
                damage: roll.damage,
                critical: roll.is_critical,
            });
            PlayerEffect::Damage {
                amount: roll.damage,
                critical: roll.is_critical,
            }
        } else {
            if let Some(buff) = skill.effect {
                battle.buffs.grant(buff);
            }
            battle.log.push(LogEntry::SkillBuff {
                skill: skill.name.clone(),
            });
            PlayerEffect::Buff
        };

        finish_player_action(state, effect)
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        match state.battle.as_ref() {
            Some(battle) => check_resources(battle),
            None => Err(BattleError::NoBattle),
        }
    }
}

// ============================================================================
// UseItem
// ============================================================================

/// Consumes one unit of an inventory item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UseItemAction {
    pub item: String,
}

impl UseItemAction {
    pub fn new(item: impl Into<String>) -> Self {
        Self { item: item.into() }
    }
}

impl ActionTransition for UseItemAction {
    type Error = BattleError;
    type Result = PlayerOutcome;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        player_turn(state)?;
        if env.items().item(&self.item).is_none() {
            return Err(BattleError::UnknownItem {
                item: self.item.clone(),
            });
        }
        if state.inventory.quantity(&self.item) == 0 {
            return Err(BattleError::OutOfStock {
                item: self.item.clone(),
            });
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        _rng: &mut dyn RngOracle,
    ) -> Result<Self::Result, Self::Error> {
        let definition = env
            .items()
            .item(&self.item)
            .ok_or_else(|| BattleError::UnknownItem {
                item: self.item.clone(),
            })?;
        if !state.inventory.take(&self.item) {
            return Err(BattleError::OutOfStock {
                item: self.item.clone(),
            });
        }

        let name = definition.name.clone();
        let battle = active_battle_mut(state)?;
        let effect = match definition.effect {
            ItemEffect::Heal(amount) => {
                let before = battle.player_hp;
                battle.player_hp = heal(before, amount, battle.max_hp());
                let amount = battle.player_hp - before;
                battle.log.push(LogEntry::ItemHeal { item: name, amount });
                PlayerEffect::Heal { amount }
            }
            ItemEffect::RestoreMp(amount) => {
                let before = battle.player_mp;
                battle.player_mp = heal(before, amount, battle.max_mp());
                let amount = battle.player_mp - before;
                battle.log.push(LogEntry::ItemMana { item: name, amount });
                PlayerEffect::RestoreMp { amount }
            }
            ItemEffect::Empower => {
                battle.buffs.grant(SkillEffect::Empower);
                battle.log.push(LogEntry::ItemBuff { item: name });
                PlayerEffect::Buff
            }
            ItemEffect::Evasion => {
                battle.buffs.grant(SkillEffect::Evasion { turns: 1 });
                battle.log.push(LogEntry::ItemBuff { item: name });
                PlayerEffect::Buff
            }
            ItemEffect::Bomb(damage) => {
                battle.enemy.hp = apply_damage(battle.enemy.hp, damage);
                battle.log.push(LogEntry::ItemHit { item: name, damage });
                PlayerEffect::Damage {
                    amount: damage,
                    critical: false,
                }
            }
        };

        finish_player_action(state, effect)
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        match state.battle.as_ref() {
            Some(battle) => check_resources(battle),
            None => Err(BattleError::NoBattle),
        }
    }
}

// ============================================================================
// EnemyTurn
// ============================================================================

/// The enemy's counter-attack for a specific encounter.
///
/// Carries the encounter serial it was scheduled for; once the encounter ends
/// or the game is reset the action is stale and rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTurnAction {
    pub encounter: u64,
}

impl EnemyTurnAction {
    pub fn new(encounter: u64) -> Self {
        Self { encounter }
    }
}

impl ActionTransition for EnemyTurnAction {
    type Error = BattleError;
    type Result = EnemyOutcome;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let stale = BattleError::StaleEncounter {
            scheduled: self.encounter,
            current: state.encounter,
        };
        if self.encounter != state.encounter {
            return Err(stale);
        }
        let battle = active_battle(state)?;
        if battle.encounter != self.encounter {
            return Err(stale);
        }
        if battle.turn != Turn::Enemy {
            return Err(BattleError::NotEnemyTurn);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        rng: &mut dyn RngOracle,
    ) -> Result<Self::Result, Self::Error> {
        let rules = env.config().combat;
        let battle = active_battle_mut(state)?;
        let enemy = battle.enemy.name().to_string();
        let attack = battle.enemy.template.attack_name.clone();

        let evasion = rules.evasion_chance(battle.buffs.contains(PlayerBuffs::EVASION));
        let evaded = check_evasion(evasion, &mut *rng);

        let (damage, critical) = if evaded {
            battle.log.push(LogEntry::Evaded { enemy, attack });
            (0, false)
        } else {
            let roll = calculate_damage_with(
                &rules,
                battle.enemy.template.damage,
                0,
                rules.enemy_crit_chance,
                rng,
            );
            let damage = if battle.buffs.contains(PlayerBuffs::GUARD) {
                guarded_damage(roll.damage, &rules)
            } else {
                roll.damage
            };
            battle.player_hp = apply_damage(battle.player_hp, damage);
            battle.log.push(LogEntry::EnemyHit {
                enemy,
                attack,
                damage,
                critical: roll.is_critical,
            });
            (damage, roll.is_critical)
        };

        let player_hp = battle.player_hp;
        let defeat = player_hp == 0;
        if defeat {
            battle.log.push(LogEntry::PlayerDefeated {
                enemy: battle.enemy.name().to_string(),
            });
            state.phase = Phase::GameOver;
        } else {
            battle.tick_cooldowns();
            battle.buffs.tick();
            battle.turn = Turn::Player;
        }

        Ok(EnemyOutcome {
            evaded,
            damage,
            critical,
            player_hp,
            defeat,
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        match state.battle.as_ref() {
            Some(battle) => check_resources(battle),
            None => Err(BattleError::NoBattle),
        }
    }
}
