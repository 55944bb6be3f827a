//! Plain-text rendering of notes and scales

use crate::models::{Accidental, Letter, Scale};

/// Separator between notes, as the prompt has always printed them
pub const NOTE_SEPARATOR: &str = ", ";

/// Letter followed by its accidental symbol: "F#", "G##", "Ab", "Bbb", "C"
pub fn render(letter: Letter, accidental: Accidental) -> String {
    format!("{}{}", letter.as_str(), accidental.symbol())
}

/// All notes of a scale joined with `separator`
pub fn render_notes(scale: &Scale, separator: &str) -> String {
    scale
        .notes()
        .map(|note| render(note.letter, note.accidental))
        .collect::<Vec<_>>()
        .join(separator)
}

/// "C# Melodic Minor: C#, D#, E, ..."
pub fn render_scale(scale: &Scale) -> String {
    format!(
        "{} {}: {}",
        scale.root,
        scale.mode,
        render_notes(scale, NOTE_SEPARATOR)
    )
}
