use crate::env::{GameEnv, OptionChoice, RngOracle};
use crate::personality::resolve_type;
use crate::state::{GameState, Phase};

use super::{ActionTransition, AnswerOutcome, QuizError};

/// Answers the current quiz question.
///
/// The last answer resolves the personality type and moves to the result
/// phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubmitAnswerAction {
    pub choice: OptionChoice,
}

impl SubmitAnswerAction {
    pub fn new(choice: OptionChoice) -> Self {
        Self { choice }
    }
}

impl ActionTransition for SubmitAnswerAction {
    type Error = QuizError;
    type Result = AnswerOutcome;

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        if state.phase != Phase::Quiz {
            return Err(QuizError::WrongPhase { phase: state.phase });
        }
        if env.quiz().question(state.answers.len()).is_none() {
            return Err(QuizError::QuizComplete {
                answered: state.answers.len(),
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
        let index = state.answers.len();
        let question = env
            .quiz()
            .question(index)
            .ok_or(QuizError::QuizComplete { answered: index })?;
        let picked = question.option(self.choice).picks;
        state.answers.push(picked);

        let resolved = if state.answers.len() == env.quiz().questions().len() {
            let personality =
                resolve_type(&state.answers, env.classes(), env.config().fallback_type);
            state.personality = Some(personality);
            state.phase = Phase::Result;
            Some(personality)
        } else {
            None
        };

        Ok(AnswerOutcome {
            question: index,
            picked,
            resolved,
        })
    }

    fn post_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let total = env.quiz().questions().len();
        if state.answers.len() > total {
            return Err(QuizError::QuizComplete { answered: total });
        }
        Ok(())
    }
}
