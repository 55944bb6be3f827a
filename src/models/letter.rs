//! The seven natural letter names
//!
//! Letters form a cycle C D E F G A B C. Scale construction moves around
//! this cycle one letter per scale degree, which is what keeps a heptatonic
//! scale from skipping or repeating a letter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::pitch_class::PitchClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// All letters in cycle order, starting from C
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position in the cycle (C = 0 ... B = 6)
    pub fn index(self) -> usize {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    /// Pitch class of the unaltered letter
    pub fn natural_pitch_class(self) -> PitchClass {
        let semitones = match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        };
        PitchClass::new(semitones)
    }

    /// Step around the letter cycle; negative steps walk backwards
    pub fn advance(self, steps: i32) -> Letter {
        let index = (self.index() as i32 + steps).rem_euclid(7);
        Letter::ALL[index as usize]
    }

    pub fn next(self) -> Letter {
        self.advance(1)
    }

    pub fn prev(self) -> Letter {
        self.advance(-1)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::A => "A",
            Letter::B => "B",
        }
    }

    /// Case-insensitive conversion from a single character
    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Letter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Letter::from_char(c).ok_or_else(|| format!("Invalid letter: '{}'. Expected one of: A-G", s))
            }
            _ => Err(format!("Invalid letter: '{}'. Expected one of: A-G", s)),
        }
    }
}
