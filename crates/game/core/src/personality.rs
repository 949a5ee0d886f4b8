//! Personality resolution from quiz answers.
//!
//! Each quiz option picks one [`Letter`]; letters belong to one of four
//! [`Axis`] pairs. [`compute_type`] tallies the picks per axis and the
//! majority side wins, with ties going to the axis default (E, S, T, J).

use core::fmt;
use core::str::FromStr;

use crate::env::ClassOracle;

/// One side of a personality dichotomy.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Letter {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl Letter {
    /// Returns the axis this letter belongs to.
    pub const fn axis(self) -> Axis {
        match self {
            Letter::E | Letter::I => Axis::Energy,
            Letter::S | Letter::N => Axis::Information,
            Letter::T | Letter::F => Axis::Decisions,
            Letter::J | Letter::P => Axis::Structure,
        }
    }

    /// Returns the other side of the same axis.
    pub const fn opposite(self) -> Letter {
        match self {
            Letter::E => Letter::I,
            Letter::I => Letter::E,
            Letter::S => Letter::N,
            Letter::N => Letter::S,
            Letter::T => Letter::F,
            Letter::F => Letter::T,
            Letter::J => Letter::P,
            Letter::P => Letter::J,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Letter::E => 'E',
            Letter::I => 'I',
            Letter::S => 'S',
            Letter::N => 'N',
            Letter::T => 'T',
            Letter::F => 'F',
            Letter::J => 'J',
            Letter::P => 'P',
        }
    }

    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'E' => Some(Letter::E),
            'I' => Some(Letter::I),
            'S' => Some(Letter::S),
            'N' => Some(Letter::N),
            'T' => Some(Letter::T),
            'F' => Some(Letter::F),
            'J' => Some(Letter::J),
            'P' => Some(Letter::P),
            _ => None,
        }
    }

    /// Short trait description shown on the result screen.
    pub const fn description(self) -> &'static str {
        match self {
            Letter::E => "Extraverted: Gains energy from social interactions",
            Letter::I => "Introverted: Gains energy from solitary activities",
            Letter::S => "Sensing: Focuses on concrete details and practical matters",
            Letter::N => "Intuitive: Focuses on patterns, possibilities and the big picture",
            Letter::T => "Thinking: Makes decisions based on logic and objective analysis",
            Letter::F => "Feeling: Makes decisions based on values and how actions affect others",
            Letter::J => "Judging: Prefers structure, plans, and organization",
            Letter::P => "Perceiving: Prefers flexibility, spontaneity, and adaptability",
        }
    }
}

/// The four dichotomies, in type-code order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// E / I
    Energy,
    /// S / N
    Information,
    /// T / F
    Decisions,
    /// J / P
    Structure,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Energy,
        Axis::Information,
        Axis::Decisions,
        Axis::Structure,
    ];

    /// Position of this axis inside a type code.
    pub const fn index(self) -> usize {
        match self {
            Axis::Energy => 0,
            Axis::Information => 1,
            Axis::Decisions => 2,
            Axis::Structure => 3,
        }
    }

    /// Side that wins ties.
    pub const fn default_letter(self) -> Letter {
        match self {
            Axis::Energy => Letter::E,
            Axis::Information => Letter::S,
            Axis::Decisions => Letter::T,
            Axis::Structure => Letter::J,
        }
    }

    pub const fn other_letter(self) -> Letter {
        self.default_letter().opposite()
    }
}

/// Error returned when a string is not one of the 16 type codes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid personality code '{0}'")]
pub struct ParsePersonalityError(pub String);

/// A four-letter personality code such as `ESTJ`.
///
/// Invariant: letter `i` always belongs to `Axis::ALL[i]`, so every value is
/// one of the 16 valid codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonalityType([Letter; 4]);

impl PersonalityType {
    pub const ESTJ: Self = Self([Letter::E, Letter::S, Letter::T, Letter::J]);
    pub const INFP: Self = Self([Letter::I, Letter::N, Letter::F, Letter::P]);

    /// Builds a type from four letters, rejecting letters on the wrong axis.
    pub fn from_letters(letters: [Letter; 4]) -> Option<Self> {
        Axis::ALL
            .iter()
            .zip(letters.iter())
            .all(|(axis, letter)| letter.axis() == *axis)
            .then_some(Self(letters))
    }

    pub const fn letters(&self) -> [Letter; 4] {
        self.0
    }

    pub const fn letter(&self, axis: Axis) -> Letter {
        self.0[axis.index()]
    }

    /// All 16 codes, ordered by axis default first.
    pub fn all() -> impl Iterator<Item = PersonalityType> {
        (0u8..16).map(|bits| {
            let pick = |axis: Axis, bit: u8| {
                if bits & (1 << (3 - bit)) == 0 {
                    axis.default_letter()
                } else {
                    axis.other_letter()
                }
            };
            Self([
                pick(Axis::Energy, 0),
                pick(Axis::Information, 1),
                pick(Axis::Decisions, 2),
                pick(Axis::Structure, 3),
            ])
        })
    }

    /// Trait descriptions for each of the four letters, in code order.
    pub fn traits(&self) -> [&'static str; 4] {
        self.0.map(Letter::description)
    }
}

impl fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.0 {
            write!(f, "{}", letter.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for PersonalityType {
    type Err = ParsePersonalityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParsePersonalityError(s.to_string());
        let mut letters = [Letter::E; 4];
        let mut chars = s.trim().chars();
        for slot in letters.iter_mut() {
            *slot = chars.next().and_then(Letter::from_char).ok_or_else(invalid)?;
        }
        if chars.next().is_some() {
            return Err(invalid());
        }
        Self::from_letters(letters).ok_or_else(invalid)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PersonalityType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PersonalityType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = <String as serde::Deserialize>::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}

/// Tallies picks per axis and returns the majority code.
///
/// Ties (including axes nobody answered) resolve to the axis default letter.
pub fn compute_type(picks: &[Letter]) -> PersonalityType {
    let mut votes = [[0u32; 2]; 4];
    for pick in picks {
        let axis = pick.axis();
        let side = usize::from(*pick != axis.default_letter());
        votes[axis.index()][side] += 1;
    }

    let letters = Axis::ALL.map(|axis| {
        let [default_side, other_side] = votes[axis.index()];
        if default_side >= other_side {
            axis.default_letter()
        } else {
            axis.other_letter()
        }
    });

    PersonalityType(letters)
}

/// Computes the type and substitutes `fallback` when no class exists for it.
pub fn resolve_type(
    picks: &[Letter],
    classes: &(impl ClassOracle + ?Sized),
    fallback: PersonalityType,
) -> PersonalityType {
    let computed = compute_type(picks);
    if classes.class(computed).is_some() {
        computed
    } else {
        fallback
    }
}
