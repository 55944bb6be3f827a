//! Musical data model
//!
//! Pitch classes, letters, accidentals, spelled notes and finished scales.

pub mod accidental;
pub mod letter;
pub mod note;
pub mod pitch_class;
pub mod scale;

// Re-export commonly used types
pub use accidental::Accidental;
pub use letter::Letter;
pub use note::{pitch_class, Note};
pub use pitch_class::PitchClass;
pub use scale::Scale;
