/// Degree-by-degree scale construction
///
/// Building a scale walks two cycles in lockstep: the chromatic circle
/// (by the mode's step sizes) and the letter cycle (by the degree numbers).
/// Each landing point is then spelled on its letter by the enharmonic
/// module. Walking letters by degree rather than picking "the nearest
/// name" for each pitch is what produces F# G# A B C# D E# in F# harmonic
/// minor instead of F# G# A B C# D F.
///
/// Example: G Lydian
///   steps    2 2 2 1 2 2 1
///   letters  G A B C D E F G
///   result   G A B C# D E F# G

use crate::error::ScaleError;
use crate::models::pitch_class::SEMITONES;
use crate::models::{Letter, Note, PitchClass, Scale};
use crate::modes::{ModeCatalog, ModeDefinition, Pattern};

use super::enharmonic::spell;

/// Build the scale of `mode` on `root`.
///
/// All-or-nothing: if any degree cannot be spelled the whole scale is
/// rejected.
pub fn build(root: Note, mode: &ModeDefinition) -> Result<Scale, ScaleError> {
    let ascending_pattern = mode.ascending();
    check_steps(mode, ascending_pattern)?;

    let mut ascending = walk_up(root, ascending_pattern)?;
    ascending.push(root);

    let descending = match mode.descending() {
        Some(pattern) => {
            check_steps(mode, pattern)?;
            walk_down(root, pattern)?
        }
        None => Vec::new(),
    };

    log::debug!(
        "Built {} {}: {} ascending, {} descending",
        root,
        mode.name(),
        ascending.len(),
        descending.len()
    );

    Ok(Scale {
        root,
        mode: mode.name().to_string(),
        ascending,
        descending,
    })
}

/// Look `mode` up in `catalog` and build it on `root`
pub fn build_named(catalog: &ModeCatalog, root: Note, mode: &str) -> Result<Scale, ScaleError> {
    build(root, catalog.lookup(mode)?)
}

/// Steps must all move upward and close exactly on the octave
fn check_steps(mode: &ModeDefinition, pattern: &Pattern) -> Result<(), ScaleError> {
    let steps = pattern.steps();
    let total: i32 = steps.iter().sum();
    if pattern.is_empty() || total != SEMITONES as i32 || steps.iter().any(|&s| s <= 0) {
        return Err(ScaleError::MalformedMode {
            mode: mode.name().to_string(),
            reason: format!("steps {:?} do not climb to the octave", steps),
        });
    }
    Ok(())
}

/// Root upward through every tone of the pattern (root included, octave not)
fn walk_up(root: Note, pattern: &Pattern) -> Result<Vec<Note>, ScaleError> {
    let tones = pattern.tones();
    let steps = pattern.steps();

    let mut notes = Vec::with_capacity(tones.len() + 1);
    notes.push(root);

    let mut letter = root.letter;
    let mut pitch = root.pitch_class();
    for (i, pair) in tones.windows(2).enumerate() {
        letter = letter.advance(pair[1].degree as i32 - pair[0].degree as i32);
        pitch = pitch.transpose(steps[i]);
        notes.push(spelled(letter, pitch, pair[1].degree)?);
    }

    Ok(notes)
}

/// From the top root downward through every tone below it, ending on the root
fn walk_down(root: Note, pattern: &Pattern) -> Result<Vec<Note>, ScaleError> {
    let tones = pattern.tones();
    let steps = pattern.steps();

    let mut notes = Vec::with_capacity(tones.len());

    // the octave above the root sits on "degree 8", one letter past degree 7
    let mut degree = 8i32;
    let mut letter = root.letter;
    let mut pitch = root.pitch_class();
    for (tone, step) in tones.iter().zip(steps.iter()).rev() {
        letter = letter.advance(tone.degree as i32 - degree);
        pitch = pitch.transpose(-step);
        degree = tone.degree as i32;
        notes.push(spelled(letter, pitch, tone.degree)?);
    }

    Ok(notes)
}

fn spelled(letter: Letter, pitch: PitchClass, degree: u8) -> Result<Note, ScaleError> {
    let accidental = spell(letter, pitch)?;
    let note = Note::new(letter, accidental);
    log::debug!("  degree {} -> {} (pitch class {})", degree, note, pitch);
    Ok(note)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Accidental;
    use crate::modes::{Alterations, ModeCatalog};

    fn mode(name: &str) -> &'static ModeDefinition {
        ModeCatalog::builtin().unwrap().lookup(name).unwrap()
    }

    fn names(notes: &[Note]) -> Vec<String> {
        notes.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_c_major() {
        let scale = build(Note::natural(Letter::C), mode("Major")).unwrap();
        assert_eq!(names(&scale.ascending), vec!["C", "D", "E", "F", "G", "A", "B", "C"]);
        assert!(scale.descending.is_empty());
    }

    #[test]
    fn test_f_sharp_harmonic_minor_uses_e_sharp() {
        let scale = build(Note::new(Letter::F, Accidental::Sharp), mode("Harmonic Minor")).unwrap();
        assert_eq!(
            names(&scale.ascending),
            vec!["F#", "G#", "A", "B", "C#", "D", "E#", "F#"]
        );
    }

    #[test]
    fn test_f_sharp_lydian_augmented_uses_double_sharp() {
        let scale = build(Note::new(Letter::F, Accidental::Sharp), mode("Lydian Augmented")).unwrap();
        assert_eq!(
            names(&scale.ascending),
            vec!["F#", "G#", "A#", "B#", "C##", "D#", "E#", "F#"]
        );
    }

    #[test]
    fn test_g_flat_altered_uses_double_flats() {
        let scale = build(Note::new(Letter::G, Accidental::Flat), mode("Altered")).unwrap();
        assert_eq!(
            names(&scale.ascending),
            vec!["Gb", "Abb", "Bbb", "Cbb", "Dbb", "Ebb", "Fb", "Gb"]
        );
    }

    #[test]
    fn test_melodic_minor_descends_through_natural_minor() {
        let scale = build(Note::new(Letter::C, Accidental::Sharp), mode("Melodic Minor")).unwrap();
        assert_eq!(
            names(&scale.ascending),
            vec!["C#", "D#", "E", "F#", "G#", "A#", "B#", "C#"]
        );
        assert_eq!(names(&scale.descending), vec!["B", "A", "G#", "F#", "E", "D#", "C#"]);
        assert_eq!(scale.len(), 15);
    }

    #[test]
    fn test_build_named_looks_up_mode() {
        let catalog = ModeCatalog::builtin().unwrap();
        let scale = build_named(catalog, Note::natural(Letter::G), "lydian").unwrap();
        assert_eq!(scale.mode, "Lydian");
        assert_eq!(names(&scale.ascending), vec!["G", "A", "B", "C#", "D", "E", "F#", "G"]);

        assert_eq!(
            build_named(catalog, Note::natural(Letter::G), "lydianish").unwrap_err(),
            ScaleError::ModeNotFound("lydianish".to_string())
        );
    }

    #[test]
    fn test_pentatonic_skips_letters() {
        let scale = build(Note::natural(Letter::C), mode("Major Pentatonic")).unwrap();
        assert_eq!(names(&scale.ascending), vec!["C", "D", "E", "G", "A", "C"]);
    }

    #[test]
    fn test_bebop_repeats_letter_for_added_tone() {
        let scale = build(Note::natural(Letter::C), mode("Bebop dominant")).unwrap();
        assert_eq!(
            names(&scale.ascending),
            vec!["C", "D", "E", "F", "G", "A", "Bb", "B", "C"]
        );
    }

    #[test]
    fn test_chromatic_spells_with_sharps() {
        let scale = build(Note::natural(Letter::C), mode("Chromatic")).unwrap();
        assert_eq!(
            names(&scale.ascending),
            vec!["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B", "C"]
        );
    }

    #[test]
    fn test_blues_spells_flat_five() {
        let scale = build(Note::natural(Letter::C), mode("Blues")).unwrap();
        assert_eq!(names(&scale.ascending), vec!["C", "Eb", "F", "Gb", "G", "Bb", "C"]);
    }

    #[test]
    fn test_unspellable_root_is_rejected_whole() {
        // Fb altered would need B-triple-flat on the 4th degree
        let err = build(Note::new(Letter::F, Accidental::Flat), mode("Altered")).unwrap_err();
        assert_eq!(
            err,
            ScaleError::UnspellableInterval {
                letter: Letter::B,
                pitch_class: PitchClass::new(8),
            }
        );

        // B## major would need C-triple-sharp on the 2nd degree
        let err = build(Note::new(Letter::B, Accidental::DoubleSharp), mode("Major")).unwrap_err();
        assert!(matches!(err, ScaleError::UnspellableInterval { letter: Letter::C, .. }));
    }

    #[test]
    fn test_descending_walk_matches_ascending_for_symmetric_mode() {
        let major = ModeDefinition::new(
            "Major Both Ways",
            &Alterations::default(),
            Some(&Alterations::default()),
        )
        .unwrap();
        let scale = build(Note::natural(Letter::D), &major).unwrap();
        let mut down = scale.descending.clone();
        down.reverse();
        assert_eq!(names(&down), names(&scale.ascending[..7]));
    }
}
