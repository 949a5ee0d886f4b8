use crate::personality::Letter;

/// Oracle providing the ordered quiz questions.
pub trait QuizOracle: Send + Sync {
    fn questions(&self) -> &[Question];

    fn question(&self, index: usize) -> Option<&Question> {
        self.questions().get(index)
    }
}

/// A quiz prompt with exactly two options.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Question {
    pub id: u32,
    pub text: String,
    pub options: [QuizOption; 2],
}

impl Question {
    pub fn option(&self, choice: OptionChoice) -> &QuizOption {
        &self.options[choice.index()]
    }
}

/// One answer to a [`Question`], tagged with the letter it votes for.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuizOption {
    pub label: String,
    pub picks: Letter,
}

impl QuizOption {
    pub fn new(label: impl Into<String>, picks: Letter) -> Self {
        Self {
            label: label.into(),
            picks,
        }
    }
}

/// Which of the two options the player picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OptionChoice {
    A,
    B,
}

impl OptionChoice {
    pub const fn index(self) -> usize {
        match self {
            OptionChoice::A => 0,
            OptionChoice::B => 1,
        }
    }
}
