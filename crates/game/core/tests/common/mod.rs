#![allow(dead_code)]

use spirit_core::{
    Action, ClassInfo, ClassOracle, EnemyOracle, EnemyTemplate, ExecutionOutcome, GameConfig,
    GameEngine, GameEnv, GameState, ItemDefinition, ItemEffect, ItemOracle, Letter, OptionChoice,
    PersonalityType, Question, QuizOption, QuizOracle, RngOracle, Skill, SkillEffect, Tier,
};

/// Small content set: one question per axis, two classes, a tiered roster.
pub struct Tables {
    pub questions: Vec<Question>,
    pub classes: Vec<(PersonalityType, ClassInfo)>,
    pub enemies: Vec<EnemyTemplate>,
    pub items: Vec<ItemDefinition>,
}

impl QuizOracle for Tables {
    fn questions(&self) -> &[Question] {
        &self.questions
    }
}

impl ClassOracle for Tables {
    fn class(&self, code: PersonalityType) -> Option<&ClassInfo> {
        self.classes
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, class)| class)
    }
}

impl EnemyOracle for Tables {
    fn roster(&self) -> &[EnemyTemplate] {
        &self.enemies
    }
}

impl ItemOracle for Tables {
    fn items(&self) -> &[ItemDefinition] {
        &self.items
    }
}

fn question(id: u32, a: Letter, b: Letter) -> Question {
    Question {
        id,
        text: format!("Question {id}"),
        options: [
            QuizOption::new(format!("Pick {a}"), a),
            QuizOption::new(format!("Pick {b}"), b),
        ],
    }
}

pub const SHIELD_BASH: usize = 0;
pub const RALLY: usize = 1;
pub const IRON_WALL: usize = 2;
pub const EXECUTION: usize = 3;

pub fn tables() -> Tables {
    let knight = ClassInfo::new("Knight Captain", 120)
        .with_base_mp(40)
        .with_skill(Skill::new("Shield Bash", 18))
        .with_skill(Skill::new("Rally", -25).with_mp_cost(10).with_cooldown(2))
        .with_skill(
            Skill::new("Iron Wall", 0)
                .with_mp_cost(15)
                .with_cooldown(3)
                .with_effect(SkillEffect::Guard { turns: 2 }),
        )
        .with_skill(Skill::new("Execution", 200).with_mp_cost(50));
    let dreamer = ClassInfo::new("Dreamer", 90)
        .with_base_mp(60)
        .with_skill(Skill::new("Imaginary Strike", 25).with_mp_cost(10));

    Tables {
        questions: vec![
            question(1, Letter::E, Letter::I),
            question(2, Letter::S, Letter::N),
            question(3, Letter::T, Letter::F),
            question(4, Letter::J, Letter::P),
        ],
        classes: vec![
            (PersonalityType::ESTJ, knight),
            (PersonalityType::INFP, dreamer),
        ],
        enemies: vec![
            EnemyTemplate::new("Slime", 30, 8, Tier::Weak)
                .with_attack_name("Sticky Tackle")
                .with_exp_reward(10),
            EnemyTemplate::new("Goblin", 40, 10, Tier::Weak)
                .with_attack_name("Knife Slash")
                .with_exp_reward(15),
            EnemyTemplate::new("Orc", 80, 15, Tier::Normal)
                .with_attack_name("Club Smash")
                .with_exp_reward(30),
            EnemyTemplate::new("Dragon", 150, 130, Tier::Strong)
                .with_attack_name("Fire Breath")
                .with_exp_reward(100),
        ],
        items: vec![
            ItemDefinition::new("healing_potion", "Healing Potion", ItemEffect::Heal(30))
                .with_quantity(2),
            ItemDefinition::new("ether", "Ether", ItemEffect::RestoreMp(20)),
            ItemDefinition::new("attack_elixir", "Attack Elixir", ItemEffect::Empower),
            ItemDefinition::new("smoke_bomb", "Smoke Bomb", ItemEffect::Evasion),
            ItemDefinition::new("bomb_stone", "Bomb Stone", ItemEffect::Bomb(15)),
        ],
    }
}

pub fn env<'a>(tables: &'a Tables, config: &'a GameConfig) -> GameEnv<'a> {
    GameEnv::new(tables, tables, tables, tables, config)
}

pub fn run(
    state: &mut GameState,
    env: GameEnv<'_>,
    rng: &mut dyn RngOracle,
    action: Action,
) -> ExecutionOutcome {
    GameEngine::new(state)
        .execute(env, rng, &action)
        .unwrap_or_else(|err| panic!("{} should succeed: {err}", action.as_snake_case()))
}

/// Answers every question with the same option.
pub fn answer_all(state: &mut GameState, env: GameEnv<'_>, choice: OptionChoice) {
    let mut rng = spirit_core::SequenceRng::constant(0.0);
    for _ in 0..env.quiz().questions().len() {
        run(state, env, &mut rng, Action::submit_answer(choice));
    }
}

/// Fresh ESTJ knight facing the first weak enemy (Slime).
pub fn knight_vs_slime(env: GameEnv<'_>) -> GameState {
    let mut state = GameState::new(env.items());
    answer_all(&mut state, env, OptionChoice::A);
    let mut rng = spirit_core::SequenceRng::constant(0.0);
    run(&mut state, env, &mut rng, Action::start_battle());
    state
}

/// Runs the enemy turn owed for the current encounter.
pub fn enemy_turn(
    state: &mut GameState,
    env: GameEnv<'_>,
    rng: &mut dyn RngOracle,
) -> ExecutionOutcome {
    let action = Action::enemy_turn(state.encounter);
    run(state, env, rng, action)
}
