//! Spelled notes: a letter plus an accidental
//!
//! Unlike a bare pitch class, a note keeps its spelling, so E# and F are
//! different notes that share pitch class 5. Serialized as its display
//! string ("F#", "Bbb").

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::accidental::Accidental;
use super::letter::Letter;
use super::pitch_class::PitchClass;
use crate::renderers::text::render;

/// Effective pitch class of a letter carrying an accidental
pub fn pitch_class(letter: Letter, accidental: Accidental) -> PitchClass {
    letter
        .natural_pitch_class()
        .transpose(accidental.offset() as i32)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Note {
    pub letter: Letter,
    pub accidental: Accidental,
}

impl Note {
    pub fn new(letter: Letter, accidental: Accidental) -> Self {
        Self { letter, accidental }
    }

    pub fn natural(letter: Letter) -> Self {
        Self::new(letter, Accidental::Natural)
    }

    pub fn pitch_class(&self) -> PitchClass {
        pitch_class(self.letter, self.accidental)
    }

    /// Same sounding pitch class, regardless of spelling
    pub fn is_enharmonic_with(&self, other: &Note) -> bool {
        self.pitch_class() == other.pitch_class()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self.letter, self.accidental))
    }
}

impl FromStr for Note {
    type Err = String;

    /// Accepts a letter (any case) followed by "", "#", "##", "b" or "bb"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| format!("Invalid note: '{}'. Expected a letter A-G", s))?;
        let accidental = Accidental::parse(chars.as_str())
            .ok_or_else(|| format!("Invalid note: '{}'. Expected one of: #, ##, b, bb after the letter", s))?;
        Ok(Note::new(letter, accidental))
    }
}

impl TryFrom<String> for Note {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.to_string()
    }
}
