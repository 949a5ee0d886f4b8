//! Parsing of typed player commands.

use std::str::FromStr;

use spirit_core::OptionChoice;
use thiserror::Error;

/// One line of player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Answer(OptionChoice),
    Start,
    /// Zero-based skill index; typed one-based.
    Skill(usize),
    Item(String),
    Reset,
    State,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty input")]
    Empty,
    #[error("unknown command `{0}` (type `help`)")]
    Unknown(String),
    #[error("`skill` needs a number from 1, e.g. `skill 1`")]
    BadSkill,
    #[error("`item` needs an item id, e.g. `item healing_potion`")]
    MissingItem,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut words = input.split_whitespace();
        let Some(head) = words.next() else {
            return Err(ParseCommandError::Empty);
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "a" => Command::Answer(OptionChoice::A),
            "b" => Command::Answer(OptionChoice::B),
            "start" | "fight" => Command::Start,
            "skill" | "s" => {
                let number: usize = words
                    .next()
                    .and_then(|word| word.parse().ok())
                    .ok_or(ParseCommandError::BadSkill)?;
                let index = number.checked_sub(1).ok_or(ParseCommandError::BadSkill)?;
                Command::Skill(index)
            }
            "item" | "i" => {
                let id = words.next().ok_or(ParseCommandError::MissingItem)?;
                Command::Item(id.to_string())
            }
            "reset" => Command::Reset,
            "state" | "status" => Command::State,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(ParseCommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skills_are_typed_one_based() {
        assert_eq!("skill 1".parse(), Ok(Command::Skill(0)));
        assert_eq!("S 3".parse(), Ok(Command::Skill(2)));
        assert_eq!("skill 0".parse::<Command>(), Err(ParseCommandError::BadSkill));
        assert_eq!("skill x".parse::<Command>(), Err(ParseCommandError::BadSkill));
    }

    #[test]
    fn answers_and_items() {
        assert_eq!("B".parse(), Ok(Command::Answer(OptionChoice::B)));
        assert_eq!(
            "item smoke_bomb".parse(),
            Ok(Command::Item("smoke_bomb".into()))
        );
        assert_eq!("item".parse::<Command>(), Err(ParseCommandError::MissingItem));
    }

    #[test]
    fn unknown_and_empty_input() {
        assert_eq!("   ".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "dance".parse::<Command>(),
            Err(ParseCommandError::Unknown("dance".into()))
        );
    }
}
