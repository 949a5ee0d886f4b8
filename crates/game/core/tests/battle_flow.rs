mod common;

use common::{
    EXECUTION, IRON_WALL, RALLY, SHIELD_BASH, enemy_turn, env, knight_vs_slime, run, tables,
};
use spirit_core::{
    Action, ActionResult, BattleError, EnemyOutcome, ExecuteError, GameConfig, GameEngine,
    GameError, GameState, LogEntry, Phase, PlayerEffect, SequenceRng, Tier, TransitionPhase,
    Turn, step,
};

/// Draws that never crit and never evade.
fn steady() -> SequenceRng {
    SequenceRng::constant(0.99)
}

fn battle_error(err: ExecuteError) -> BattleError {
    match err {
        ExecuteError::StartBattle(inner)
        | ExecuteError::UseSkill(inner)
        | ExecuteError::UseItem(inner)
        | ExecuteError::EnemyTurn(inner) => inner.error,
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn start_battle_resets_the_encounter() {
    let tables = tables();
    let config = GameConfig::default();
    let env = env(&tables, &config);
    let state = knight_vs_slime(env);

    assert_eq!(state.phase, Phase::Battle);
    assert_eq!(state.encounter, 1);
    let battle = state.battle.as_ref().expect("battle started");
    assert_eq!(battle.enemy.name(), "Slime");
    assert_eq!(battle.player_hp, 120);
    assert_eq!(battle.player_mp, 40);
    assert_eq!(battle.turn, Turn::Player);
    assert_eq!(battle.log.lines(), vec!["Slime appeared!"]);
}

#[test]
fn tier_follows_battle_count() {
    let tables = tables();
    let config = GameConfig::default();
    let env = env(&tables, &config);

    for (battle_count, tier) in [
        (0, Tier::Weak),
        (1, Tier::Weak),
        (2, Tier::Normal),
        (4, Tier::Normal),
        (5, Tier::Strong),
        (9, Tier::Strong),
    ] {
        for roll in [0.0, 0.3, 0.6, 0.99] {
            let mut state = knight_vs_slime(env);
            state.phase = Phase::Victory;
            state.battle_count = battle_count;

            let outcome = run(
                &mut state,
                env,
                &mut SequenceRng::constant(roll),
                Action::start_battle(),
            );
            match outcome.result {
                ActionResult::Encounter(start) => assert_eq!(start.tier, tier),
                other => panic!("unexpected result {other:?}"),
            }
            let battle = state.battle.as_ref().expect("battle started");
            assert_eq!(battle.enemy.template.tier, tier);
        }
    }
}

#[test]
fn empty_tier_draws_from_the_whole_roster() {
    let mut tables = tables();
    tables.enemies.retain(|enemy| enemy.tier != Tier::Normal);
    let config = GameConfig::default();
    let env = env(&tables, &config);
    let mut state = knight_vs_slime(env);
    state.phase = Phase::Victory;
    state.battle_count = 3;

    run(
        &mut state,
        env,
        &mut SequenceRng::constant(0.99),
        Action::start_battle(),
    );
    assert_eq!(state.battle.expect("battle").enemy.name(), "Dragon");
}

#[test]
fn lethal_skill_wins_without_counter_attack() {
    let tables = tables();
    let config = GameConfig::default();
    let env = env(&tables, &config);
    let mut state = knight_vs_slime(env);
    state.battle.as_mut().expect("battle").enemy.hp = 10;

    let outcome = run(&mut state, env, &mut steady(), Action::use_skill(SHIELD_BASH));

    assert_eq!(state.phase, Phase::Victory);
    assert_eq!(state.battle_count, 1);
    assert_eq!(state.experience, 10);
    assert!(outcome.pending_enemy_action.is_none());
    match outcome.result {
        ActionResult::Player(player) => {
            assert!(player.victory);
            assert_eq!(player.enemy_hp, 0);
            assert_eq!(player.level_up, Some(2));
        }
        other => panic!("unexpected result {other:?}"),
    }

    let battle = state.battle.as_ref().expect("battle kept for the result screen");
    assert_eq!(battle.enemy.hp, 0);
    assert_eq!(battle.player_hp, 120);
    assert_eq!(
        battle.log.lines()[1..],
        [
            "Used Shield Bash! 18 damage!",
            "Defeated Slime! Gained 10 EXP.",
            "Reached level 2!",
        ]
    );
}

#[test]
fn non_lethal_skill_schedules_the_enemy_turn() {
    let tables = tables();
    let config = GameConfig::default();
    let env = env(&tables, &config);
    let mut state = knight_vs_slime(env);

    let outcome = run(&mut state, env, &mut steady(), Action::use_skill(SHIELD_BASH));

    let pending = outcome.pending_enemy_action.expect("enemy acts next");
    assert_eq!(pending.encounter, state.encounter);
    assert_eq!(pending.delay_ms, GameConfig::DEFAULT_ENEMY_TURN_DELAY_MS);
    assert!(state.awaiting_enemy());

    let outcome = run(&mut state, env, &mut steady(), pending.action());
    assert_eq!(
        outcome.result,
        ActionResult::Enemy(EnemyOutcome {
            evaded: false,
            damage: 8,
            critical: false,
            player_hp: 112,
            defeat: false,
        })
    );
    assert!(outcome.pending_enemy_action.is_none());
    assert!(state.is_player_turn());
    assert_eq!(
        state.battle.as_ref().expect("battle").log.last(),
        Some(&LogEntry::EnemyHit {
            enemy: "Slime".into(),
            attack: "Sticky Tackle".into(),
            damage: 8,
            critical: false,
        })
    );
}

#[test]
fn lethal_enemy_attack_ends_the_game() {
    let tables = tables();
    let config = GameConfig::default();
    let env = env(&tables, &config);
    let mut state = knight_vs_slime(env);

    run(&mut state, env, &mut steady(), Action::use_skill(SHIELD_BASH));
    state.battle.as_mut().expect("battle").player_hp = 5;
    let outcome = enemy_turn(&mut state, env, &mut steady());

    assert_eq!(state.phase, Phase::GameOver);
    let battle = state.battle.as_ref().expect("battle");
    assert_eq!(battle.player_hp, 0);
    assert_eq!(battle.log.lines().last().map(String::as_str), Some("Fell to Slime..."));
    assert!(matches!(
        outcome.result,
        ActionResult::Enemy(EnemyOutcome { defeat: true, .. })
    ));
}

#[test]
fn acting_out_of_turn_is_rejected_without_change() {
    let tables = tables();
    let config = GameConfig::default();
    let env = env(&tables, &config);
    let mut state = knight_vs_slime(env);

    // Enemy turn while the player is up.
    let before = state.clone();
    let action = Action::enemy_turn(state.encounter);
    let err = GameEngine::new(&mut state)
        .execute(env, &mut steady(), &action)
        .expect_err("player's turn");
    assert_eq!(battle_error(err), BattleError::NotEnemyTurn);
    assert_eq!(state, before);

    // Skill while the enemy is up.
    run(&mut state, env, &mut steady(), Action::use_skill(SHIELD_BASH));
    let before = state.clone();
    let err = GameEngine::new(&mut state)
        .execute(env, &mut steady(), &Action::use_skill(SHIELD_BASH))
        .expect_err("enemy's turn");
    assert_eq!(battle_error(err), BattleError::NotPlayerTurn);
    assert_eq!(state, before);
}

#[test]
fn skills_need_mp_and_respect_cooldowns() {
    let tables = tables();
    let config = GameConfig::default();
    let env = env(&tables, &config);
    let mut state = knight_vs_slime(env);

    let err = GameEngine::new(&mut state)
        .execute(env, &mut steady(), &Action::use_skill(EXECUTION))
        .expect_err("Execution costs 50 MP");
    assert_eq!(
        battle_error(err.clone()),
        BattleError::InsufficientMp {
            required: 50,
            available: 40,
        }
    );
    assert!(err.severity().is_recoverable());

    state.battle.as_mut().expect("battle").player_hp = 100;
    let outcome = run(&mut state, env, &mut steady(), Action::use_skill(RALLY));
    match outcome.result {
        ActionResult::Player(player) => {
            // 100 + 25 clamped to 120
            assert_eq!(player.effect, PlayerEffect::Heal { amount: 20 });
        }
        other => panic!("unexpected result {other:?}"),
    }
    let battle = state.battle.as_ref().expect("battle");
    assert_eq!(battle.player_hp, 120);
    assert_eq!(battle.player_mp, 30);

    enemy_turn(&mut state, env, &mut steady());

    let err = GameEngine::new(&mut state)
        .execute(env, &mut steady(), &Action::use_skill(RALLY))
        .expect_err("Rally is cooling down");
    assert_eq!(
        battle_error(err),
        BattleError::OnCooldown {
            skill: "Rally".into(),
            remaining: 1,
        }
    );

    let err = GameEngine::new(&mut state)
        .execute(env, &mut steady(), &Action::use_skill(9))
        .expect_err("no such skill");
    assert_eq!(battle_error(err), BattleError::UnknownSkill { index: 9 });
}

#[test]
fn guard_halves_enemy_damage() {
    let tables = tables();
    let config = GameConfig::default();
    let env = env(&tables, &config);
    let mut state = knight_vs_slime(env);

    run(&mut state, env, &mut steady(), Action::use_skill(IRON_WALL));
    enemy_turn(&mut state, env, &mut steady());

    let battle = state.battle.as_ref().expect("battle");
    assert_eq!(battle.player_hp, 116);
    assert_eq!(battle.player_mp, 25);
    assert_eq!(battle.log.lines()[1], "Used Iron Wall!");
}

#[test]
fn critical_hits_use_the_injected_rolls() {
    let tables = tables();
    let config = GameConfig::default();
    let env = env(&tables, &config);
    let mut state = knight_vs_slime(env);

    let mut rng = SequenceRng::constant(0.0);
    let outcome = run(&mut state, env, &mut rng, Action::use_skill(SHIELD_BASH));
    assert_eq!(rng.draws(), 1);
    match outcome.result {
        ActionResult::Player(player) => assert_eq!(
            player.effect,
            PlayerEffect::Damage {
                amount: 27,
                critical: true,
            }
        ),
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn items_apply_and_run_out() {
    let tables = tables();
    let config = GameConfig::default();
    let env = env(&tables, &config);
    let mut state = knight_vs_slime(env);

    let mut rng = steady();
    run(&mut state, env, &mut rng, Action::use_item("bomb_stone"));
    assert_eq!(rng.draws(), 0);
    assert_eq!(state.battle.as_ref().expect("battle").enemy.hp, 15);
    assert_eq!(state.inventory.quantity("bomb_stone"), 0);
    enemy_turn(&mut state, env, &mut steady());

    let err = GameEngine::new(&mut state)
        .execute(env, &mut steady(), &Action::use_item("bomb_stone"))
        .expect_err("only one bomb");
    assert_eq!(
        battle_error(err),
        BattleError::OutOfStock {
            item: "bomb_stone".into(),
        }
    );

    let err = GameEngine::new(&mut state)
        .execute(env, &mut steady(), &Action::use_item("phoenix_down"))
        .expect_err("not defined");
    assert_eq!(
        battle_error(err),
        BattleError::UnknownItem {
            item: "phoenix_down".into(),
        }
    );

    run(&mut state, env, &mut steady(), Action::use_item("healing_potion"));
    let battle = state.battle.as_ref().expect("battle");
    assert_eq!(battle.player_hp, 120);
    assert_eq!(state.inventory.quantity("healing_potion"), 1);
}

#[test]
fn elixir_boosts_only_the_next_attack() {
    let tables = tables();
    let config = GameConfig::default();
    let env = env(&tables, &config);
    let mut state = knight_vs_slime(env);
    state.battle.as_mut().expect("battle").enemy.hp = 100;

    run(&mut state, env, &mut steady(), Action::use_item("attack_elixir"));
    enemy_turn(&mut state, env, &mut steady());
    run(&mut state, env, &mut steady(), Action::use_skill(SHIELD_BASH));
    // 18 * 1.5 = 27
    assert_eq!(state.battle.as_ref().expect("battle").enemy.hp, 73);

    enemy_turn(&mut state, env, &mut steady());
    run(&mut state, env, &mut steady(), Action::use_skill(SHIELD_BASH));
    assert_eq!(state.battle.as_ref().expect("battle").enemy.hp, 55);
}

#[test]
fn smoke_bomb_makes_the_next_attack_likely_to_miss() {
    let tables = tables();
    let config = GameConfig::default();
    let env = env(&tables, &config);
    let mut state = knight_vs_slime(env);

    run(&mut state, env, &mut steady(), Action::use_item("smoke_bomb"));
    let mut rng = SequenceRng::constant(0.3);
    let outcome = enemy_turn(&mut state, env, &mut rng);

    assert_eq!(rng.draws(), 1);
    assert!(matches!(
        outcome.result,
        ActionResult::Enemy(EnemyOutcome { evaded: true, damage: 0, .. })
    ));
    let battle = state.battle.as_ref().expect("battle");
    assert_eq!(battle.player_hp, 120);
    assert_eq!(
        battle.log.lines().last().map(String::as_str),
        Some("Dodged Slime's Sticky Tackle!")
    );

    // Buff lasted a single enemy turn.
    run(&mut state, env, &mut steady(), Action::use_skill(SHIELD_BASH));
    let mut rng = SequenceRng::constant(0.3);
    enemy_turn(&mut state, env, &mut rng);
    assert_eq!(state.battle.as_ref().expect("battle").player_hp, 112);
}

#[test]
fn reset_makes_the_pending_enemy_turn_stale() {
    let tables = tables();
    let config = GameConfig::default();
    let env = env(&tables, &config);
    let mut state = knight_vs_slime(env);

    let outcome = run(&mut state, env, &mut steady(), Action::use_skill(SHIELD_BASH));
    let pending = outcome.pending_enemy_action.expect("enemy acts next");

    run(&mut state, env, &mut steady(), Action::reset_game());
    let before = state.clone();

    let err = GameEngine::new(&mut state)
        .execute(env, &mut steady(), &pending.action())
        .expect_err("encounter is gone");
    assert!(err.is_stale_enemy_turn());
    assert_eq!(err.phase(), TransitionPhase::PreValidate);
    assert_eq!(state, before);
}

#[test]
fn reset_returns_to_a_fresh_quiz() {
    let tables = tables();
    let config = GameConfig::default();
    let env = env(&tables, &config);

    // From victory.
    let mut state = knight_vs_slime(env);
    state.battle.as_mut().expect("battle").enemy.hp = 1;
    run(&mut state, env, &mut steady(), Action::use_item("bomb_stone"));
    assert_eq!(state.phase, Phase::Victory);
    run(&mut state, env, &mut steady(), Action::reset_game());

    assert_eq!(state.phase, Phase::Quiz);
    assert!(state.answers.is_empty());
    assert!(state.personality.is_none());
    assert!(state.battle.is_none());
    assert_eq!(state.battle_count, 0);
    assert_eq!(state.experience, 0);
    assert_eq!(state.inventory.quantity("bomb_stone"), 1);

    // From game over.
    let mut state = knight_vs_slime(env);
    run(&mut state, env, &mut steady(), Action::use_skill(SHIELD_BASH));
    state.battle.as_mut().expect("battle").player_hp = 1;
    enemy_turn(&mut state, env, &mut steady());
    assert_eq!(state.phase, Phase::GameOver);
    run(&mut state, env, &mut steady(), Action::reset_game());
    assert_eq!(state.phase, Phase::Quiz);
    assert!(state.battle.is_none());
}

#[test]
fn start_battle_only_from_result_or_victory() {
    let tables = tables();
    let config = GameConfig::default();
    let env = env(&tables, &config);

    let quiz = GameState::new(env.items());
    let battle = knight_vs_slime(env);
    let mut game_over = knight_vs_slime(env);
    run(&mut game_over, env, &mut steady(), Action::use_skill(SHIELD_BASH));
    game_over.battle.as_mut().expect("battle").player_hp = 1;
    enemy_turn(&mut game_over, env, &mut steady());

    for mut state in [quiz, battle, game_over] {
        let phase = state.phase;
        let before = state.clone();
        let err = GameEngine::new(&mut state)
            .execute(env, &mut steady(), &Action::start_battle())
            .expect_err("start battle outside result/victory");

        assert_eq!(err.phase(), TransitionPhase::PreValidate);
        assert_eq!(battle_error(err), BattleError::WrongPhase { phase });
        assert_eq!(state, before);
    }
}

#[test]
fn step_leaves_the_input_untouched() {
    let tables = tables();
    let config = GameConfig::default();
    let env = env(&tables, &config);
    let state = knight_vs_slime(env);
    let snapshot = state.clone();

    let (next, outcome) = step(&state, env, &mut steady(), &Action::use_skill(SHIELD_BASH))
        .expect("skill succeeds");

    assert_eq!(state, snapshot);
    assert_eq!(next.nonce, state.nonce + 1);
    assert_eq!(next.battle.as_ref().expect("battle").enemy.hp, 12);
    assert!(outcome.pending_enemy_action.is_some());
}

#[test]
fn log_only_grows() {
    let tables = tables();
    let config = GameConfig::default();
    let env = env(&tables, &config);
    let mut state = knight_vs_slime(env);
    state.battle.as_mut().expect("battle").enemy.hp = 200;

    let mut previous = state.battle.as_ref().expect("battle").log.lines();
    for _ in 0..4 {
        run(&mut state, env, &mut steady(), Action::use_skill(SHIELD_BASH));
        enemy_turn(&mut state, env, &mut steady());
        let lines = state.battle.as_ref().expect("battle").log.lines();
        assert_eq!(lines.len(), previous.len() + 2);
        assert_eq!(lines[..previous.len()], previous[..]);
        previous = lines;
    }
}
