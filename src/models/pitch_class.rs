//! Chromatic pitch classes (0-11, C = 0)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of semitones in an octave
pub const SEMITONES: u8 = 12;

/// A position on the chromatic circle.
///
/// Always kept in `0..12`; every constructor and operation reduces modulo 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// Build a pitch class from any signed semitone count
    pub fn new(semitones: i32) -> Self {
        PitchClass(semitones.rem_euclid(SEMITONES as i32) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Move up (positive) or down (negative) by a number of semitones
    pub fn transpose(self, semitones: i32) -> Self {
        PitchClass::new(self.0 as i32 + semitones)
    }

    /// Ascending distance from `self` to `other`, in `0..12`
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (other.0 + SEMITONES - self.0) % SEMITONES
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
