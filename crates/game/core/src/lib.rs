//! Deterministic game rules and data types shared across clients.
//!
//! `spirit-core` defines the canonical rules of the personality quiz and the
//! turn-based battle loop, and exposes pure APIs that can be reused by the
//! runtime, the content loaders and offline tools. All state mutation flows
//! through [`engine::GameEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod personality;
pub mod progression;
pub mod state;

pub use action::{
    Action, ActionResult, ActionTransition, AnswerOutcome, BattleError, EncounterStart,
    EnemyOutcome, EnemyTurnAction, PlayerEffect, PlayerOutcome, QuizError, ResetGameAction,
    StartBattleAction, SubmitAnswerAction, UseItemAction, UseSkillAction,
};
pub use combat::{
    DamageRoll, apply_damage, boosted_damage, calculate_damage, calculate_damage_with,
    check_evasion, guarded_damage, heal,
};
pub use config::{CombatRules, GameConfig, TierThresholds};
pub use engine::{
    ExecuteError, ExecutionOutcome, GameEngine, PendingEnemyAction, TransitionPhase,
    TransitionPhaseError, step,
};
pub use env::{
    ClassInfo, ClassOracle, EnemyOracle, EnemyTemplate, GameEnv, ItemDefinition, ItemEffect,
    ItemOracle, OptionChoice, PcgRng, Question, QuizOption, QuizOracle, RngOracle, SequenceRng,
    Skill, SkillEffect, SkillKind, Tier,
};
pub use error::{ErrorSeverity, GameError, NeverError};
pub use personality::{
    Axis, Letter, ParsePersonalityError, PersonalityType, compute_type, resolve_type,
};
pub use progression::{calculate_level, experience_for_next_level};
pub use state::{
    BattleLog, BattleState, Buffs, EnemyInstance, GameState, InventoryState, ItemStack, LogEntry,
    Phase, PlayerBuffs, Turn,
};
