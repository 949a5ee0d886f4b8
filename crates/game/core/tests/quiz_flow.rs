mod common;

use common::{answer_all, env, run, tables};
use spirit_core::{
    Action, ClassOracle, ExecuteError, GameConfig, GameEngine, GameState, OptionChoice,
    PersonalityType, Phase, QuizError, SequenceRng, TransitionPhase,
};

#[test]
fn default_side_answers_resolve_to_estj_and_its_class() {
    let tables = tables();
    let config = GameConfig::default();
    let env = env(&tables, &config);
    let mut state = GameState::new(env.items());

    answer_all(&mut state, env, OptionChoice::A);

    assert_eq!(state.phase, Phase::Result);
    assert_eq!(state.personality, Some(PersonalityType::ESTJ));
    let class = tables
        .class(PersonalityType::ESTJ)
        .expect("ESTJ is in the table");
    assert_eq!(class.name, "Knight Captain");
}

#[test]
fn last_answer_reports_the_resolved_type() {
    let tables = tables();
    let config = GameConfig::default();
    let env = env(&tables, &config);
    let mut state = GameState::new(env.items());
    let mut rng = SequenceRng::constant(0.0);

    for _ in 0..3 {
        let outcome = run(&mut state, env, &mut rng, Action::submit_answer(OptionChoice::B));
        assert!(matches!(
            outcome.result,
            spirit_core::ActionResult::Answer(answer) if answer.resolved.is_none()
        ));
        assert_eq!(state.phase, Phase::Quiz);
    }

    let outcome = run(&mut state, env, &mut rng, Action::submit_answer(OptionChoice::B));
    match outcome.result {
        spirit_core::ActionResult::Answer(answer) => {
            assert_eq!(answer.question, 3);
            assert_eq!(answer.resolved, Some(PersonalityType::INFP));
        }
        other => panic!("unexpected result {other:?}"),
    }
    assert!(outcome.pending_enemy_action.is_none());
}

#[test]
fn code_without_a_class_falls_back() {
    let tables = tables();
    let config = GameConfig::default();
    let env = env(&tables, &config);
    let mut state = GameState::new(env.items());
    let mut rng = SequenceRng::constant(0.0);

    // E, N, T, P
    for choice in [OptionChoice::A, OptionChoice::B, OptionChoice::A, OptionChoice::B] {
        run(&mut state, env, &mut rng, Action::submit_answer(choice));
    }

    assert_eq!(state.personality, Some(GameConfig::DEFAULT_FALLBACK_TYPE));
}

#[test]
fn every_answer_sequence_resolves_to_a_playable_class() {
    let tables = tables();
    let config = GameConfig::default();
    let env = env(&tables, &config);

    for mask in 0u8..16 {
        let mut state = GameState::new(env.items());
        let mut rng = SequenceRng::constant(0.0);
        for bit in 0..4 {
            let choice = if mask & (1 << bit) == 0 {
                OptionChoice::A
            } else {
                OptionChoice::B
            };
            run(&mut state, env, &mut rng, Action::submit_answer(choice));
        }

        let personality = state.personality.expect("quiz complete");
        assert!(PersonalityType::all().any(|code| code == personality));
        assert!(
            tables.class(personality).is_some(),
            "{personality} has no class"
        );
    }
}

#[test]
fn answering_outside_the_quiz_is_rejected_without_change() {
    let tables = tables();
    let config = GameConfig::default();
    let env = env(&tables, &config);
    let mut state = GameState::new(env.items());
    answer_all(&mut state, env, OptionChoice::A);
    let before = state.clone();

    let err = GameEngine::new(&mut state)
        .execute(
            env,
            &mut SequenceRng::constant(0.0),
            &Action::submit_answer(OptionChoice::A),
        )
        .expect_err("quiz is over");

    match err {
        ExecuteError::SubmitAnswer(inner) => {
            assert_eq!(inner.phase, TransitionPhase::PreValidate);
            assert_eq!(
                inner.error,
                QuizError::WrongPhase {
                    phase: Phase::Result
                }
            );
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert_eq!(state, before);
}

#[test]
fn nonce_counts_only_successful_actions() {
    let tables = tables();
    let config = GameConfig::default();
    let env = env(&tables, &config);
    let mut state = GameState::new(env.items());
    let mut rng = SequenceRng::constant(0.0);

    run(&mut state, env, &mut rng, Action::submit_answer(OptionChoice::A));
    assert_eq!(state.nonce, 1);

    let _ = GameEngine::new(&mut state).execute(env, &mut rng, &Action::start_battle());
    assert_eq!(state.nonce, 1);
}
