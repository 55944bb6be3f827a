/// Enharmonic spelling: choosing the accidental for a fixed letter
///
/// The scale builder decides *which* letter a degree is written on; this
/// module decides *how* that letter must be altered to sound the wanted
/// pitch class. Because the letter is fixed, the answer is unique: the
/// signed distance from the letter's natural pitch to the target, folded
/// into [-6, +5]. Only distances of at most two semitones can be written.
///
/// Examples:
///   letter E, target 5 (F)  -> E#
///   letter F, target 7 (G)  -> F##
///   letter C, target 11 (B) -> Cb  (wraps below C)

use crate::error::ScaleError;
use crate::models::{Accidental, Letter, PitchClass};

/// Signed semitone distance from `letter`'s natural pitch to `target`, in [-6, 5]
pub fn signed_distance(letter: Letter, target: PitchClass) -> i8 {
    let up = letter.natural_pitch_class().interval_to(target) as i8;
    if up > 6 {
        up - 12
    } else if up == 6 {
        -6
    } else {
        up
    }
}

/// Accidental that makes `letter` sound `target`
pub fn spell(letter: Letter, target: PitchClass) -> Result<Accidental, ScaleError> {
    let distance = signed_distance(letter, target);
    Accidental::from_offset(distance).ok_or_else(|| {
        log::error!(
            "Cannot spell pitch class {} on {} (needs {} semitones)",
            target,
            letter,
            distance
        );
        ScaleError::UnspellableInterval {
            letter,
            pitch_class: target,
        }
    })
}
